pub mod question {
    pub mod entity;
    pub mod repository;
}

pub mod error;
pub mod health {
    pub mod routes;
}
pub mod pages {
    pub mod assets;
    pub mod routes;
}
pub mod question {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod summary {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod tags;

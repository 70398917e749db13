pub mod application {
    pub mod question {
        pub mod count_opinions;
        pub mod create;
        pub mod get_by_id;
        pub mod submit_opinion;
    }
    pub mod summary {
        pub mod summarize;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod text;
    }
    pub mod question {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod count_opinions;
            pub mod create;
            pub mod get_by_id;
            pub mod submit_opinion;
        }
    }
    pub mod summary {
        pub mod errors;
        pub mod model;
        pub mod prompt;
        pub mod services;
        pub mod use_cases {
            pub mod summarize;
        }
    }
}

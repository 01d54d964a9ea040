pub mod application {
    pub mod cart {
        pub mod delete;
        pub mod find_all;
        pub mod find_by_id;
        pub mod save;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod delete;
            pub mod find_all;
            pub mod find_by_id;
            pub mod save;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}

pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get_items;
        pub mod get_total;
        pub mod remove_item;
    }
    pub mod pie {
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_of_the_week;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get_items;
            pub mod get_total;
            pub mod remove_item;
        }
    }
    pub mod pie {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_of_the_week;
        }
    }
}

pub mod shared {
    pub mod config;
    pub mod core {
        pub mod client_labels;
        pub mod duration;
        pub mod errors;
        pub mod wall_clock;
    }
    pub mod infrastructure {
        pub mod time_entry_store;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod command;
            pub mod entry;
        }
        pub mod use_cases {
            pub mod register_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_time_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
    pub mod reporting {
        pub mod core {
            pub mod aggregator;
            pub mod annex;
            pub mod assembler;
            pub mod csv_export;
            pub mod report;
            pub mod request;
        }
        pub mod use_cases {
            pub mod generate_report {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod export_csv {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod lookups {
        pub mod core {
            pub mod catalog;
        }
        pub mod adapters {
            pub mod catalog_files;
        }
        pub mod use_cases {
            pub mod list_lookups {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;

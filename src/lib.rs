pub mod shared {
    pub mod config;
    pub mod infrastructure {
        pub mod http_client;
        pub mod link_opener;
        pub mod mailer;
    }
}

pub mod modules {
    pub mod appointments {
        pub mod core {
            pub mod channel;
            pub mod message;
            pub mod outcome;
            pub mod record;
            pub mod validate;
        }
        pub mod use_cases {
            pub mod submit_appointment {
                pub mod handler;
                pub mod pipeline;
                pub mod status;
                pub mod view;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod relay_notification {
                pub mod email;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod channels;
                pub mod form_relay;
                pub mod mail_relay;
                pub mod messaging_deep_link;
                pub mod server_endpoint;
            }
        }
    }
}

pub mod shell;

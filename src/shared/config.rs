//! Runtime configuration.
//!
//! Resolved once at process startup and passed explicitly into handlers and
//! channels. Nothing reads the process environment while a request is handled.

use crate::modules::appointments::core::record::RecordField;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAIL_SUBJECT: &str = "Appointment Request";
pub const DEFAULT_ENDPOINT_TIMEOUT_MS: u64 = 8_000;
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_RELAY_PATH: &str = "/api/submit-appointment";
pub const BOOKING_PATH: &str = "/api/appointments";
pub const GRAPHQL_PATH: &str = "/gql";
pub const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com";
pub const DEFAULT_CLINIC_NAME: &str = "Shree Varad Maternity";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is required when the {channel} channel is enabled")]
    Missing {
        key: &'static str,
        channel: &'static str,
    },

    #[error("unknown booking channel: {0}")]
    UnknownChannel(String),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Form,
    Server,
    Messaging,
    Mail,
}

impl ChannelKind {
    /// Order used when `BOOKING_CHANNELS` is not set.
    pub const DEFAULT_ORDER: [ChannelKind; 4] = [
        ChannelKind::Form,
        ChannelKind::Server,
        ChannelKind::Messaging,
        ChannelKind::Mail,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Form => "form",
            ChannelKind::Server => "server",
            ChannelKind::Messaging => "messaging",
            ChannelKind::Mail => "mail",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "form" => Ok(ChannelKind::Form),
            "server" => Ok(ChannelKind::Server),
            "messaging" => Ok(ChannelKind::Messaging),
            "mail" => Ok(ChannelKind::Mail),
            other => Err(ConfigError::UnknownChannel(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRelayConfig {
    pub url: String,
    /// Logical field to the collection endpoint's field identifier.
    pub fields: Vec<(RecordField, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEndpointConfig {
    pub url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingConfig {
    pub recipient: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub recipient: String,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelConfig {
    Form(FormRelayConfig),
    Server(ServerEndpointConfig),
    Messaging(MessagingConfig),
    Mail(MailConfig),
}

impl ChannelConfig {
    pub const fn kind(&self) -> ChannelKind {
        match self {
            ChannelConfig::Form(_) => ChannelKind::Form,
            ChannelConfig::Server(_) => ChannelKind::Server,
            ChannelConfig::Messaging(_) => ChannelKind::Messaging,
            ChannelConfig::Mail(_) => ChannelKind::Mail,
        }
    }
}

/// Delivery channels in the order the pipeline tries them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingConfig {
    pub channels: Vec<ChannelConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub path: String,
    /// Checked per request; a missing destination is answered with a 500.
    pub to_email: Option<String>,
    pub from_email: Option<String>,
    pub sendgrid_api_key: String,
    pub sendgrid_api_url: String,
    pub clinic_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    /// Upper bound for every outbound HTTP request.
    pub http_timeout: Duration,
    pub booking: BookingConfig,
    pub relay: RelayConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let addr_raw = get("APP_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "APP_ADDR",
            value: addr_raw.clone(),
        })?;

        let http_timeout = Duration::from_millis(parse_millis(
            &get,
            "HTTP_TIMEOUT_MS",
            DEFAULT_HTTP_TIMEOUT_MS,
        )?);

        let booking = BookingConfig {
            channels: booking_channels(&get)?,
        };

        let relay = RelayConfig {
            path: get("RELAY_PATH").unwrap_or_else(|| DEFAULT_RELAY_PATH.to_string()),
            to_email: get("TO_EMAIL"),
            from_email: get("FROM_EMAIL"),
            sendgrid_api_key: get("SENDGRID_API_KEY").unwrap_or_default(),
            sendgrid_api_url: get("SENDGRID_API_URL")
                .unwrap_or_else(|| DEFAULT_SENDGRID_API_URL.to_string()),
            clinic_name: get("CLINIC_NAME").unwrap_or_else(|| DEFAULT_CLINIC_NAME.to_string()),
        };
        if !relay.path.starts_with('/') || [BOOKING_PATH, GRAPHQL_PATH].contains(&relay.path.as_str()) {
            return Err(ConfigError::Invalid {
                key: "RELAY_PATH",
                value: relay.path,
            });
        }

        Ok(Self {
            addr,
            http_timeout,
            booking,
            relay,
        })
    }
}

/// An explicit `BOOKING_CHANNELS` list must be fully configured. Without it,
/// every channel whose settings are present is used in the default order, and
/// only a channel missing its required setting is skipped.
fn booking_channels(
    get: &impl Fn(&str) -> Option<String>,
) -> Result<Vec<ChannelConfig>, ConfigError> {
    match get("BOOKING_CHANNELS") {
        Some(list) => list
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .map(ChannelKind::parse)
            .map(|kind| kind.and_then(|kind| channel_config(kind, get)))
            .collect(),
        None => ChannelKind::DEFAULT_ORDER
            .into_iter()
            .filter_map(|kind| match channel_config(kind, get) {
                Err(ConfigError::Missing { .. }) => None,
                other => Some(other),
            })
            .collect(),
    }
}

fn channel_config(
    kind: ChannelKind,
    get: &impl Fn(&str) -> Option<String>,
) -> Result<ChannelConfig, ConfigError> {
    let require = |key: &'static str| {
        get(key).ok_or(ConfigError::Missing {
            key,
            channel: kind.as_str(),
        })
    };

    match kind {
        ChannelKind::Form => Ok(ChannelConfig::Form(FormRelayConfig {
            url: require("BOOKING_FORM_URL")?,
            fields: parse_field_table(&get("BOOKING_FORM_FIELDS").unwrap_or_default())?,
        })),
        ChannelKind::Server => {
            let url = require("BOOKING_ENDPOINT_URL")?;
            let timeout_ms = parse_millis(
                get,
                "BOOKING_ENDPOINT_TIMEOUT_MS",
                DEFAULT_ENDPOINT_TIMEOUT_MS,
            )?;
            Ok(ChannelConfig::Server(ServerEndpointConfig {
                url,
                timeout: Duration::from_millis(timeout_ms),
            }))
        }
        ChannelKind::Messaging => Ok(ChannelConfig::Messaging(MessagingConfig {
            recipient: require("BOOKING_WHATSAPP_NUMBER")?,
        })),
        ChannelKind::Mail => Ok(ChannelConfig::Mail(MailConfig {
            recipient: require("BOOKING_EMAIL")?,
            subject: get("BOOKING_MAIL_SUBJECT").unwrap_or_else(|| DEFAULT_MAIL_SUBJECT.to_string()),
        })),
    }
}

fn parse_millis(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: u64,
) -> Result<u64, ConfigError> {
    match get(key) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

/// Parses `firstName=entry.1, phone=entry.2`.
pub fn parse_field_table(raw: &str) -> Result<Vec<(RecordField, String)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let invalid = || ConfigError::Invalid {
                key: "BOOKING_FORM_FIELDS",
                value: pair.to_string(),
            };
            let (field, identifier) = pair.split_once('=').ok_or_else(invalid)?;
            let field = RecordField::from_key(field.trim()).ok_or_else(invalid)?;
            let identifier = identifier.trim();
            if identifier.is_empty() {
                return Err(invalid());
            }
            Ok((field, identifier.to_string()))
        })
        .collect()
}

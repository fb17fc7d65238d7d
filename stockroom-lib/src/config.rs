//! Service endpoint configuration.
//!
//! Every resource lives behind its own microservice. Base URLs default to the
//! local development ports and can be overridden per resource through the
//! environment.

use std::collections::HashMap;

use url::Url;

use crate::error::ConfigError;

/// The backend resources this client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Categories,
    Colors,
    Sizes,
    Genders,
    States,
    Subcategories,
    Products,
    Orders,
    OrderEmails,
}

impl ResourceKind {
    /// All resources, in display order.
    pub const ALL: [ResourceKind; 9] = [
        Self::Categories,
        Self::Subcategories,
        Self::Colors,
        Self::Sizes,
        Self::Genders,
        Self::States,
        Self::Products,
        Self::Orders,
        Self::OrderEmails,
    ];

    /// Kebab-case name used on the command line and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Colors => "colors",
            Self::Sizes => "sizes",
            Self::Genders => "genders",
            Self::States => "states",
            Self::Subcategories => "subcategories",
            Self::Products => "products",
            Self::Orders => "orders",
            Self::OrderEmails => "order-emails",
        }
    }

    /// Environment variable that overrides this resource's base URL.
    pub fn env_var(&self) -> &'static str {
        match self {
            Self::Categories => "STOCKROOM_API_CATEGORIES",
            Self::Colors => "STOCKROOM_API_COLORS",
            Self::Sizes => "STOCKROOM_API_SIZES",
            Self::Genders => "STOCKROOM_API_GENDERS",
            Self::States => "STOCKROOM_API_STATES",
            Self::Subcategories => "STOCKROOM_API_SUBCATEGORIES",
            Self::Products => "STOCKROOM_API_PRODUCTS",
            Self::Orders => "STOCKROOM_API_ORDERS",
            Self::OrderEmails => "STOCKROOM_API_ORDER_EMAILS",
        }
    }

    /// Base URL used when no override is set.
    pub fn default_url(&self) -> &'static str {
        match self {
            Self::Categories => "http://localhost:8090/api/categorias",
            Self::Colors => "http://localhost:8091/api/colores",
            Self::OrderEmails => "http://localhost:8092/api/correospedidos",
            Self::States => "http://localhost:8093/api/estados",
            Self::Orders => "http://localhost:8095/api/pedidos",
            Self::Genders => "http://localhost:8096/api/generos",
            Self::Products => "http://localhost:8096/api/productos",
            Self::Subcategories => "http://localhost:8097/api/subcategorias",
            Self::Sizes => "http://localhost:8098/api/tallas",
        }
    }

    /// Name of a single record, as used in log lines.
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Categories => "category",
            Self::Colors => "color",
            Self::Sizes => "size",
            Self::Genders => "gender",
            Self::States => "state",
            Self::Subcategories => "subcategory",
            Self::Products => "product",
            Self::Orders => "order",
            Self::OrderEmails => "order-email",
        }
    }

    /// Parses a kebab-case name. Singular forms are accepted too.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| name == kind.as_str() || name == kind.singular())
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown resource '{}'", s))
    }
}

/// Base URL of every resource service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    urls: HashMap<ResourceKind, String>,
}

impl Endpoints {
    /// Endpoints pointing at the local development services.
    pub fn new() -> Self {
        Self {
            urls: ResourceKind::ALL
                .into_iter()
                .map(|kind| (kind, kind.default_url().to_string()))
                .collect(),
        }
    }

    /// Defaults with overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from `lookup`, keyed by [`ResourceKind::env_var`].
    ///
    /// Empty values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut endpoints = Self::new();
        for kind in ResourceKind::ALL {
            if let Some(value) = lookup(kind.env_var()).filter(|v| !v.trim().is_empty()) {
                log::debug!("config: {} -> {}", kind.env_var(), value);
                endpoints.set(kind, value)?;
            }
        }
        Ok(endpoints)
    }

    /// Overrides one resource's base URL.
    ///
    /// The URL must be absolute http(s). A trailing slash is dropped.
    pub fn set(&mut self, kind: ResourceKind, url: impl Into<String>) -> Result<(), ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let parsed = Url::parse(trimmed)
            .map_err(|e| ConfigError::invalid_url(kind, &url, e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::invalid_url(
                kind,
                &url,
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        self.urls.insert(kind, trimmed.to_string());
        Ok(())
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, kind: ResourceKind, url: impl Into<String>) -> Result<Self, ConfigError> {
        self.set(kind, url)?;
        Ok(self)
    }

    /// Base URL for `kind`, without a trailing slash.
    pub fn url(&self, kind: ResourceKind) -> &str {
        self.urls
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_url())
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let endpoints = Endpoints::new();
        assert_eq!(
            endpoints.url(ResourceKind::Categories),
            "http://localhost:8090/api/categorias"
        );
        assert_eq!(
            endpoints.url(ResourceKind::OrderEmails),
            "http://localhost:8092/api/correospedidos"
        );
        assert_eq!(endpoints.url(ResourceKind::Sizes), "http://localhost:8098/api/tallas");
    }

    #[test]
    fn test_lookup_overrides() {
        let endpoints = Endpoints::from_lookup(|key| match key {
            "STOCKROOM_API_COLORS" => Some("https://api.example.com/colors/".to_string()),
            "STOCKROOM_API_SIZES" => Some("   ".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(endpoints.url(ResourceKind::Colors), "https://api.example.com/colors");
        assert_eq!(endpoints.url(ResourceKind::Sizes), ResourceKind::Sizes.default_url());
    }

    #[test]
    fn test_invalid_override() {
        let err = Endpoints::from_lookup(|key| {
            (key == "STOCKROOM_API_ORDERS").then(|| "not a url".to_string())
        })
        .unwrap_err();
        let ConfigError::InvalidUrl { kind, value, .. } = err;
        assert_eq!(kind, ResourceKind::Orders);
        assert_eq!(value, "not a url");

        assert!(Endpoints::new().with(ResourceKind::Orders, "ftp://host/x").is_err());
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(ResourceKind::parse("colors"), Some(ResourceKind::Colors));
        assert_eq!(ResourceKind::parse("Color"), Some(ResourceKind::Colors));
        assert_eq!(ResourceKind::parse("category"), Some(ResourceKind::Categories));
        assert_eq!(ResourceKind::parse("subcategory"), Some(ResourceKind::Subcategories));
        assert_eq!(ResourceKind::parse("order-email"), Some(ResourceKind::OrderEmails));
        assert_eq!(ResourceKind::parse("widgets"), None);
        assert_eq!("sizes".parse::<ResourceKind>(), Ok(ResourceKind::Sizes));
        assert_eq!(ResourceKind::Orders.singular(), "order");
    }

    #[test]
    fn test_env_vars_unique() {
        let mut vars: Vec<_> = ResourceKind::ALL.iter().map(|k| k.env_var()).collect();
        vars.sort();
        vars.dedup();
        assert_eq!(vars.len(), ResourceKind::ALL.len());
    }
}

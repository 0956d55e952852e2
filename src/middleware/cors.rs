use crate::config::CorsConfig;
use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Origin allow-list supporting `scheme://*.domain` wildcard subdomains
#[derive(Debug, Clone, Default)]
pub struct OriginPolicy {
    exact: Vec<String>,
    /// (scheme prefix, `.domain` suffix)
    wildcard: Vec<(String, String)>,
    any: bool,
}

impl OriginPolicy {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut policy = Self::default();

        for origin in origins {
            let origin = origin.as_ref().trim().trim_end_matches('/');
            if origin == "*" {
                policy.any = true;
            } else if let Some((scheme, domain)) = origin.split_once("://*.") {
                policy
                    .wildcard
                    .push((format!("{}://", scheme), format!(".{}", domain)));
            } else if !origin.is_empty() {
                policy.exact.push(origin.to_string());
            }
        }

        policy
    }

    pub fn allows(&self, origin: &str) -> bool {
        if self.any || self.exact.iter().any(|o| o == origin) {
            return true;
        }

        self.wildcard.iter().any(|(scheme, suffix)| {
            origin
                .strip_prefix(scheme.as_str())
                .and_then(|host| host.strip_suffix(suffix.as_str()))
                .map(|subdomain| {
                    !subdomain.is_empty() && !subdomain.contains(['/', ':', '@'])
                })
                .unwrap_or(false)
        })
    }
}

/// CORS middleware for the form and any configured front-end origins
pub fn cors(config: &CorsConfig) -> Cors {
    let policy = OriginPolicy::new(&config.allowed_origins);

    Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            origin
                .to_str()
                .map(|origin| policy.allows(origin))
                .unwrap_or(false)
        })
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::HeaderName::from_static("x-request-id"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .supports_credentials()
        .max_age(3600)
}

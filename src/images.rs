// src/images.rs
//
// Remote image allowlist. Thumbnails and avatars from hosts outside the list
// are drawn as a placeholder tile instead of being fetched.

/// `https://images-na.ssl-images-amazon.com/**` style pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemotePattern {
    pub protocol: &'static str,
    pub hostname: &'static str,
    /// Path prefix; "/" admits any path.
    pub path_prefix: &'static str,
}

impl RemotePattern {
    pub const fn https(hostname: &'static str) -> Self {
        Self { protocol: "https", hostname, path_prefix: "/" }
    }

    fn matches(&self, url: &ParsedUrl<'_>) -> bool {
        url.scheme.eq_ignore_ascii_case(self.protocol)
            && url.host.eq_ignore_ascii_case(self.hostname)
            && url.path.starts_with(self.path_prefix)
    }
}

pub const DEFAULT_PATTERNS: &[RemotePattern] = &[
    RemotePattern::https("images-na.ssl-images-amazon.com"),
    RemotePattern::https("img-b.udemycdn.com"),
    // testimonial avatars
    RemotePattern::https("randomuser.me"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePolicy {
    patterns: Vec<RemotePattern>,
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self { patterns: DEFAULT_PATTERNS.to_vec() }
    }
}

impl ImagePolicy {
    pub fn new(patterns: Vec<RemotePattern>) -> Self { Self { patterns } }

    pub fn allows(&self, url: &str) -> bool {
        match ParsedUrl::parse(url) {
            Some(parsed) => self.patterns.iter().any(|p| p.matches(&parsed)),
            None => false,
        }
    }
}

struct ParsedUrl<'a> {
    scheme: &'a str,
    host: &'a str,
    path: &'a str,
}

impl<'a> ParsedUrl<'a> {
    fn parse(url: &'a str) -> Option<Self> {
        let (scheme, rest) = url.trim().split_once("://")?;
        let split = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let (authority, tail) = rest.split_at(split);

        // drop userinfo and port
        let host = authority.rsplit('@').next()?;
        let host = host.split(':').next()?;
        if host.is_empty() {
            return None;
        }

        let path = if tail.starts_with('/') { tail } else { "/" };
        Some(Self { scheme, host, path })
    }
}

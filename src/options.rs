//! Per-operation request parameters.
//!
//! Optional fields are `Option`s that are skipped when unset, so the body
//! only carries what the caller supplied. An explicit `false` or `0` is sent.

use serde::Serialize;

/// Default page offset for list calls.
pub const DEFAULT_OFFSET: u32 = 0;
/// Default page size for list calls.
pub const DEFAULT_COUNT: u32 = 100;

/// Optional server configuration shared by create and edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_email_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_api_activated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_hook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounce_hook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_hook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_first_open_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_opens: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_spam_threshold: Option<i32>,
}

macro_rules! server_setters {
    ($ty:ty) => {
        impl $ty {
            /// Color label shown in the web UI.
            pub fn color(mut self, color: impl Into<String>) -> Self {
                self.settings.color = Some(color.into());
                self
            }

            pub fn raw_email_enabled(mut self, enabled: bool) -> Self {
                self.settings.raw_email_enabled = Some(enabled);
                self
            }

            pub fn smtp_api_activated(mut self, activated: bool) -> Self {
                self.settings.smtp_api_activated = Some(activated);
                self
            }

            pub fn inbound_hook_url(mut self, url: impl Into<String>) -> Self {
                self.settings.inbound_hook_url = Some(url.into());
                self
            }

            pub fn bounce_hook_url(mut self, url: impl Into<String>) -> Self {
                self.settings.bounce_hook_url = Some(url.into());
                self
            }

            pub fn open_hook_url(mut self, url: impl Into<String>) -> Self {
                self.settings.open_hook_url = Some(url.into());
                self
            }

            /// Only post the first open of each message to the open hook.
            pub fn post_first_open_only(mut self, first_only: bool) -> Self {
                self.settings.post_first_open_only = Some(first_only);
                self
            }

            pub fn track_opens(mut self, track: bool) -> Self {
                self.settings.track_opens = Some(track);
                self
            }

            pub fn inbound_domain(mut self, domain: impl Into<String>) -> Self {
                self.settings.inbound_domain = Some(domain.into());
                self
            }

            /// Spam score above which inbound mail is rejected.
            pub fn inbound_spam_threshold(mut self, threshold: i32) -> Self {
                self.settings.inbound_spam_threshold = Some(threshold);
                self
            }
        }
    };
}

/// Body for creating a server. The name is required.
///
/// # Examples
/// ```
/// use postmark_admin_client::CreateServerOptions;
///
/// let options = CreateServerOptions::new("Staging")
///     .color("blue")
///     .track_opens(false);
/// assert_eq!(options.name, "Staging");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateServerOptions {
    pub name: String,
    #[serde(flatten)]
    pub settings: ServerSettings,
}

impl CreateServerOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: ServerSettings::default(),
        }
    }
}

server_setters!(CreateServerOptions);

/// Body for editing a server. Only the fields set here are changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditServerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub settings: ServerSettings,
}

impl EditServerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

server_setters!(EditServerOptions);

/// Pagination for list calls, sent as `offset` and `count` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageOptions {
    pub offset: u32,
    pub count: u32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            count: DEFAULT_COUNT,
        }
    }
}

impl PageOptions {
    pub fn new(offset: u32, count: u32) -> Self {
        Self { offset, count }
    }
}

/// Query for listing servers: pagination plus an optional name filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListServersOptions {
    pub offset: u32,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Default for ListServersOptions {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            count: DEFAULT_COUNT,
            name: None,
        }
    }
}

impl ListServersOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Only return servers whose name matches this filter.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl From<PageOptions> for ListServersOptions {
    fn from(page: PageOptions) -> Self {
        Self {
            offset: page.offset,
            count: page.count,
            name: None,
        }
    }
}

/// Body for creating a sender signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSignatureOptions {
    pub from_email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_email: Option<String>,
}

impl CreateSignatureOptions {
    pub fn new(from_email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            from_email: from_email.into(),
            name: name.into(),
            reply_to_email: None,
        }
    }

    pub fn reply_to_email(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to_email = Some(reply_to.into());
        self
    }
}

/// Body for updating a sender signature. Only the fields set here are changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateSignatureOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_email: Option<String>,
}

impl UpdateSignatureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn reply_to_email(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to_email = Some(reply_to.into());
        self
    }
}

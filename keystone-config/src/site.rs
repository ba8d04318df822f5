//! Site configuration: the forms on a site and how they are served.

use crate::{ConfigError, ConfigLoader, ConfigValidator, EnvLoader, Result, Validate};
use keystone_core::logging::{LogConfig, LogFormat, LogLevel, LogOutput};
use keystone_core::{Form, FormField};
use keystone_forms::{FormBinding, FormCopy, FormFlow, SubmissionController, shared};
use keystone_http_client::{BodyEncoding, HttpClientConfig, Transport};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

fn default_ttl_ms() -> u64 {
    5000
}

fn default_method() -> String {
    "post".to_string()
}

fn default_submit_label() -> String {
    "Submit".to_string()
}

fn default_field_type() -> String {
    "text".to_string()
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

fn default_true() -> bool {
    true
}

/// Everything Keystone needs to serve a site's forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// How long success and error banners stay up
    #[serde(default = "default_ttl_ms")]
    pub feedback_ttl_ms: u64,
    #[serde(default)]
    pub client: ClientSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub forms: Vec<FormDefinition>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            feedback_ttl_ms: default_ttl_ms(),
            client: ClientSettings::default(),
            logging: LoggingSettings::default(),
            forms: Vec::new(),
        }
    }
}

/// Transport settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Base URL relative form actions resolve against
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Unset means no overall timeout
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default)]
    pub encoding: BodyEncoding,
    #[serde(default = "default_true")]
    pub follow_redirects: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            timeout_ms: None,
            connect_timeout_ms: default_connect_timeout_ms(),
            encoding: BodyEncoding::default(),
            follow_redirects: true,
        }
    }
}

impl ClientSettings {
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .connect_timeout(Duration::from_millis(self.connect_timeout_ms))
            .encoding(self.encoding)
            .follow_redirects(self.follow_redirects);

        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url.clone());
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        if let Some(timeout) = self.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout));
        }
        builder.build()
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    pub colors: bool,
    /// Filter directives such as `keystone_forms=debug`
    pub filter: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        let defaults = LogConfig::default();
        Self {
            level: defaults.level,
            format: defaults.format,
            output: defaults.output,
            colors: defaults.colors,
            filter: None,
        }
    }
}

impl LoggingSettings {
    pub fn log_config(&self) -> LogConfig {
        let config = LogConfig::new()
            .level(self.level)
            .format(self.format)
            .output(self.output)
            .with_colors(self.colors);
        match &self.filter {
            Some(filter) => config.with_env_filter(filter.clone()),
            None => config,
        }
    }
}

/// One form as it appears in the page markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    pub id: String,
    pub action: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub flow: FormFlow,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// One field and its constraint attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type", default = "default_field_type")]
    pub kind: String,
    #[serde(default)]
    pub required: bool,
    /// Raw `minlength` attribute; a non-numeric value fails the build
    #[serde(default, deserialize_with = "attr::deserialize")]
    pub minlength: Option<String>,
}

mod attr {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    /// Accept `minlength = 2` and `minlength = "2"` alike.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
            Raw::Number(n) => n.to_string(),
            Raw::Text(s) => s,
        }))
    }
}

impl FieldDefinition {
    pub fn build(&self) -> FormField {
        let mut field = FormField::new(self.name.clone(), &self.kind);
        if self.required {
            field = field.required();
        }
        if let Some(minlength) = &self.minlength {
            field = field.with_minlength_attr(minlength.clone());
        }
        field
    }
}

impl FormDefinition {
    /// Build the form model and its flow's copy.
    ///
    /// Fails if a field's constraint attributes are malformed.
    pub fn build(&self) -> Result<(Form, FormCopy)> {
        let mut form = Form::new(self.id.clone(), self.action.clone())
            .with_method_attr(&self.method)
            .submit_label(self.submit_label.clone());

        for definition in &self.fields {
            let field = definition.build();
            field.descriptor()?;
            form = form.field(field);
        }

        Ok((form, self.flow.copy()))
    }
}

/// A configured form, wired and ready for interaction.
pub struct MountedForm {
    pub controller: SubmissionController,
    pub binding: FormBinding,
}

impl MountedForm {
    pub fn id(&self) -> String {
        self.controller.form().lock().id().to_string()
    }
}

impl SiteConfig {
    /// Load from a JSON or TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let loader = ConfigLoader::auto(&path)?;
        let content = std::fs::read_to_string(path)?;
        loader.parse_into(&content)
    }

    /// Load from a file, apply `KEYSTONE_*` overrides and validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.apply_env(&EnvLoader::default())?;
        config.validate()?;
        Ok(config)
    }

    /// Override settings from the environment.
    pub fn apply_env(&mut self, env: &EnvLoader) -> Result<()> {
        if let Some(ttl) = env.var("FEEDBACK_TTL_MS") {
            self.feedback_ttl_ms = ttl.trim().parse().map_err(|_| {
                ConfigError::ParseError(format!("FEEDBACK_TTL_MS is not a number: {}", ttl))
            })?;
        }
        if let Some(level) = env.var("LOG_LEVEL") {
            self.logging.level = LogLevel::parse(&level)
                .ok_or_else(|| ConfigError::ParseError(format!("unknown log level: {}", level)))?;
        }
        if let Some(format) = env.var("LOG_FORMAT") {
            self.logging.format = LogFormat::parse(&format)
                .ok_or_else(|| ConfigError::ParseError(format!("unknown log format: {}", format)))?;
        }
        if let Some(user_agent) = env.var("USER_AGENT") {
            self.client.user_agent = Some(user_agent);
        }
        Ok(())
    }

    pub fn feedback_ttl(&self) -> Duration {
        Duration::from_millis(self.feedback_ttl_ms)
    }

    pub fn form(&self, id: &str) -> Option<&FormDefinition> {
        self.forms.iter().find(|f| f.id == id)
    }

    /// Build every configured form with a controller and a live binding.
    pub fn mount(&self, transport: Arc<dyn Transport>) -> Result<Vec<MountedForm>> {
        self.forms
            .iter()
            .map(|definition| {
                let (form, copy) = definition.build()?;
                let form = shared(form);
                Ok(MountedForm {
                    binding: FormBinding::attach(form.clone()),
                    controller: SubmissionController::new(form, transport.clone(), copy)
                        .with_feedback_ttl(self.feedback_ttl()),
                })
            })
            .collect()
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        ConfigValidator::positive(self.feedback_ttl_ms, "feedback_ttl_ms")?;
        for form in &self.forms {
            ConfigValidator::not_empty(&form.id, "form id")?;
            ConfigValidator::not_empty(&form.action, &format!("action of form {}", form.id))?;
            for field in &form.fields {
                ConfigValidator::not_empty(&field.name, &format!("field name in form {}", form.id))?;
            }
            ConfigValidator::unique(
                form.fields.iter().map(|f| f.name.as_str()),
                &format!("field name in form {}", form.id),
            )?;
        }
        ConfigValidator::unique(self.forms.iter().map(|f| f.id.as_str()), "form id")
    }
}

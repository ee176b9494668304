//! Email template resources
//!
//! Templates customize the platform-sent emails for an environment. The
//! customization is a tagged union keyed by `template_type`: either styling
//! knobs over the prebuilt template, or fully custom HTML. Exactly one
//! variant exists per template by construction.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Template customization payload, discriminated by `template_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "template_type")]
pub enum TemplateCustomization {
    /// Styling applied to the platform's prebuilt template.
    #[serde(rename = "PREBUILT")]
    Prebuilt {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        button_color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        button_text_color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        font_family: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text_alignment: Option<String>,
    },
    /// Fully custom HTML content.
    #[serde(rename = "CUSTOM_HTML")]
    CustomHtml {
        subject: String,
        html_content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        plaintext_content: Option<String>,
    },
}

/// Sender identity for a template's emails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SenderInformation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_local_part: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub template_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_information: Option<SenderInformation>,
    #[serde(flatten)]
    pub customization: TemplateCustomization,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateEmailTemplateRequest {
    #[serde(skip)]
    pub project_slug: String,
    #[serde(skip)]
    pub environment_slug: String,
    pub email_template: EmailTemplate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmailTemplateResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub email_template: EmailTemplate,
}

#[derive(Debug, Clone)]
pub struct GetEmailTemplateRequest {
    pub project_slug: String,
    pub environment_slug: String,
    pub template_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetEmailTemplateResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub email_template: EmailTemplate,
}

#[derive(Debug, Clone)]
pub struct ListEmailTemplatesRequest {
    pub project_slug: String,
    pub environment_slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListEmailTemplatesResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub email_templates: Vec<EmailTemplate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateEmailTemplateRequest {
    #[serde(skip)]
    pub project_slug: String,
    #[serde(skip)]
    pub environment_slug: String,
    pub email_template: EmailTemplate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEmailTemplateResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub email_template: EmailTemplate,
}

#[derive(Debug, Clone)]
pub struct DeleteEmailTemplateRequest {
    pub project_slug: String,
    pub environment_slug: String,
    pub template_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteEmailTemplateResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
}

/// Client for email template resources.
#[derive(Clone)]
pub struct EmailTemplates {
    transport: Arc<Transport>,
}

impl EmailTemplates {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    fn base_path(project_slug: &str, environment_slug: &str) -> String {
        format!("/pwa/v3/projects/{project_slug}/environments/{environment_slug}/email_templates")
    }

    pub async fn create(
        &self,
        request: &CreateEmailTemplateRequest,
    ) -> Result<CreateEmailTemplateResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        let body = serde_json::to_vec(request).map_err(Error::Serialize)?;
        let path = Self::base_path(&request.project_slug, &request.environment_slug);
        self.transport
            .execute_json(Method::POST, &path, &[], Some(body))
            .await
    }

    pub async fn get(
        &self,
        request: &GetEmailTemplateRequest,
    ) -> Result<GetEmailTemplateResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        if request.template_id.is_empty() {
            return Err(Error::missing("template_id"));
        }
        let path = format!(
            "{}/{}",
            Self::base_path(&request.project_slug, &request.environment_slug),
            request.template_id
        );
        self.transport
            .execute_json(Method::GET, &path, &[], None)
            .await
    }

    pub async fn list(
        &self,
        request: &ListEmailTemplatesRequest,
    ) -> Result<ListEmailTemplatesResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        let path = Self::base_path(&request.project_slug, &request.environment_slug);
        self.transport
            .execute_json(Method::GET, &path, &[], None)
            .await
    }

    pub async fn update(
        &self,
        request: &UpdateEmailTemplateRequest,
    ) -> Result<UpdateEmailTemplateResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        if request.email_template.template_id.is_empty() {
            return Err(Error::missing("template_id"));
        }
        let body = serde_json::to_vec(request).map_err(Error::Serialize)?;
        let path = format!(
            "{}/{}",
            Self::base_path(&request.project_slug, &request.environment_slug),
            request.email_template.template_id
        );
        self.transport
            .execute_json(Method::PUT, &path, &[], Some(body))
            .await
    }

    pub async fn delete(
        &self,
        request: &DeleteEmailTemplateRequest,
    ) -> Result<DeleteEmailTemplateResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        if request.template_id.is_empty() {
            return Err(Error::missing("template_id"));
        }
        let path = format!(
            "{}/{}",
            Self::base_path(&request.project_slug, &request.environment_slug),
            request.template_id
        );
        self.transport
            .execute_json(Method::DELETE, &path, &[], None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prebuilt_customization_tags_and_skips_unset_fields() {
        let template = EmailTemplate {
            template_id: "welcome".into(),
            name: "Welcome".into(),
            sender_information: None,
            customization: TemplateCustomization::Prebuilt {
                button_color: Some("#1a73e8".into()),
                button_text_color: None,
                font_family: None,
                text_alignment: None,
            },
        };
        let json = serde_json::to_string(&template).unwrap();
        assert!(json.contains(r#""template_type":"PREBUILT""#), "got: {json}");
        assert!(json.contains(r##""button_color":"#1a73e8""##), "got: {json}");
        assert!(!json.contains("font_family"), "got: {json}");
        assert!(!json.contains("sender_information"), "got: {json}");
    }

    #[test]
    fn custom_html_roundtrips_through_flattened_tag() {
        let template = EmailTemplate {
            template_id: "invite".into(),
            name: "Invite".into(),
            sender_information: Some(SenderInformation {
                from_local_part: Some("no-reply".into()),
                from_domain: Some("mail.example.com".into()),
                from_name: None,
            }),
            customization: TemplateCustomization::CustomHtml {
                subject: "You're invited".into(),
                html_content: "<p>{{invite_link}}</p>".into(),
                plaintext_content: None,
            },
        };
        let json = serde_json::to_string(&template).unwrap();
        let decoded: EmailTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.customization, template.customization);
        assert_eq!(decoded.sender_information, template.sender_information);
    }

    #[test]
    fn unknown_template_type_is_a_decode_error() {
        let body = r##"{
            "template_id": "welcome",
            "name": "Welcome",
            "template_type": "MARKDOWN",
            "content": "# hi"
        }"##;
        assert!(serde_json::from_str::<EmailTemplate>(body).is_err());
    }
}

//! SOAP login and session credentials.

use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::{header, Client};

use crate::config::Config;
use crate::error::{Error, Result};

/// Session identifiers returned by a successful login.
///
/// Immutable for the rest of the run; every export request is authorised
/// from these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCredentials {
    pub server_url: Option<String>,
    pub session_id: String,
    pub organization_id: String,
}

impl SessionCredentials {
    /// Headers authorising a request against the export servlet.
    pub fn headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        let cookie = format!("oid={}; sid={}", self.organization_id, self.session_id);

        headers.insert(header::COOKIE, header_value(&cookie)?);
        headers.insert("X-SFDC-Session", header_value(&self.session_id)?);

        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<header::HeaderValue> {
    header::HeaderValue::from_str(value)
        .map_err(|e| Error::Api(format!("Session value is not a valid header: {}", e)))
}

/// Build the partner API login envelope.
pub fn login_envelope(user_name: &str, password: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8" ?>
<env:Envelope xmlns:xsd="http://www.w3.org/2001/XMLSchema"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xmlns:env="http://schemas.xmlsoap.org/soap/envelope/">
  <env:Body>
    <n1:login xmlns:n1="urn:partner.soap.sforce.com">
      <n1:username>{}</n1:username>
      <n1:password>{}</n1:password>
    </n1:login>
  </env:Body>
</env:Envelope>"#,
        escape(user_name),
        escape(password)
    )
}

/// Log in and extract the session credentials.
///
/// Any non-200 response is an [`Error::Authentication`] carrying the raw body.
/// There is no retry here; a failed login ends the run.
pub async fn login(client: &Client, config: &Config) -> Result<SessionCredentials> {
    let body = login_envelope(
        &config.sales_force_user_name,
        &config.sales_force_passwd_and_sec_token,
    );

    tracing::debug!("POST {}", config.login_url);

    let response = client
        .post(&config.login_url)
        .header(header::CONTENT_TYPE, "text/xml; charset=UTF-8")
        .header("SOAPAction", "login")
        .body(body)
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;
    tracing::debug!("Login response status: {}", status);

    if status != reqwest::StatusCode::OK {
        return Err(Error::Authentication {
            status: status.as_u16(),
            body: text,
        });
    }

    parse_login_response(&text)
}

#[derive(Clone, Copy)]
enum Field {
    ServerUrl,
    SessionId,
    OrganizationId,
}

/// Pull `serverUrl`, `sessionId` and `organizationId` out of a login
/// response, matching on local names so any namespace prefix is accepted.
pub fn parse_login_response(xml: &str) -> Result<SessionCredentials> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut server_url = None;
    let mut session_id = None;
    let mut organization_id = None;
    let mut current: Option<Field> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                current = match e.local_name().as_ref() {
                    b"serverUrl" => Some(Field::ServerUrl),
                    b"sessionId" => Some(Field::SessionId),
                    b"organizationId" => Some(Field::OrganizationId),
                    _ => None,
                };
            }
            Event::Text(t) => {
                if let Some(field) = current {
                    let value = t.unescape()?.into_owned();
                    let slot = match field {
                        Field::ServerUrl => &mut server_url,
                        Field::SessionId => &mut session_id,
                        Field::OrganizationId => &mut organization_id,
                    };
                    // First occurrence in document order wins.
                    if slot.is_none() {
                        *slot = Some(value);
                    }
                }
            }
            Event::End(_) => current = None,
            Event::Eof => break,
            _ => {}
        }
    }

    let session_id =
        session_id.ok_or_else(|| Error::Api("Login response has no sessionId".into()))?;
    let organization_id = organization_id
        .ok_or_else(|| Error::Api("Login response has no organizationId".into()))?;

    Ok(SessionCredentials {
        server_url,
        session_id,
        organization_id,
    })
}

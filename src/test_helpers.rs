//! Shared fixtures for tests that talk to a mock Salesforce org.

use std::path::Path;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::api::SessionCredentials;
use crate::config::Config;

/// A successful partner API login response.
pub(crate) const LOGIN_OK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns="urn:partner.soap.sforce.com">
  <soapenv:Body>
    <loginResponse>
      <result>
        <metadataServerUrl>https://na1.salesforce.com/services/Soap/m/28.0/00D000000000001</metadataServerUrl>
        <serverUrl>https://na1.salesforce.com/services/Soap/u/28.0/00D000000000001</serverUrl>
        <sessionId>00D000000000001!AQ0AQ.session</sessionId>
        <userInfo>
          <organizationId>00D000000000001EAA</organizationId>
        </userInfo>
      </result>
    </loginResponse>
  </soapenv:Body>
</soapenv:Envelope>"#;

/// Config pointing both the login endpoint and the site at `server`.
pub(crate) fn config_for(server: &MockServer, data_directory: &Path) -> Config {
    Config {
        sales_force_user_name: "backup@example.com".into(),
        sales_force_passwd_and_sec_token: "pw&token".into(),
        sales_force_site: server.uri(),
        data_directory: data_directory.to_path_buf(),
        login_url: format!("{}/services/Soap/u/28.0", server.uri()),
        ..Default::default()
    }
}

pub(crate) fn session() -> SessionCredentials {
    SessionCredentials {
        server_url: None,
        session_id: "SID".into(),
        organization_id: "OID".into(),
    }
}

/// Index URL for an export part, as the servlet lists it.
pub(crate) fn part_url(id: &str) -> String {
    format!("/servlet/servlet.OrgExport?fileName={}.ZIP&id=0923000000", id)
}

/// Mount HEAD and GET for one export part. HEAD advertises `advertised`
/// bytes; GET serves `body`. `gets` is the exact number of GETs expected.
pub(crate) async fn mount_part(
    server: &MockServer,
    id: &str,
    advertised: usize,
    body: Vec<u8>,
    gets: u64,
) {
    let file_name = format!("{}.ZIP", id);

    Mock::given(method("HEAD"))
        .and(path("/servlet/servlet.OrgExport"))
        .and(query_param("fileName", file_name.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; advertised]))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/servlet/servlet.OrgExport"))
        .and(query_param("fileName", file_name.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .expect(gets)
        .mount(server)
        .await;
}

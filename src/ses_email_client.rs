use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_ses::{Body, Content, Destination, Message, SendEmailRequest, Ses, SesClient};

use crate::error::NotifierError;
use crate::report::Report;

pub struct SesEmailClient {
    client: SesClient,
}

#[async_trait]
pub trait Deliver {
    /// Returns the delivery (message) id.
    async fn deliver(
        &self,
        sender: &str,
        recipients: &[String],
        report: &Report,
    ) -> Result<String, NotifierError>;
}

#[async_trait]
impl Deliver for SesEmailClient {
    async fn deliver(
        &self,
        sender: &str,
        recipients: &[String],
        report: &Report,
    ) -> Result<String, NotifierError> {
        let request = SendEmailRequest {
            source: sender.to_string(),
            destination: Destination {
                to_addresses: Some(recipients.to_vec()),
                ..Destination::default()
            },
            message: Message {
                subject: Content {
                    data: report.subject.clone(),
                    ..Content::default()
                },
                body: Body {
                    html: Some(Content {
                        data: report.body_html.clone(),
                        ..Content::default()
                    }),
                    ..Body::default()
                },
            },
            ..SendEmailRequest::default()
        };

        let result = self.client.send_email(request).await?;
        Ok(result.message_id)
    }
}

impl SesEmailClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(SesClient::new(region))
    }

    pub fn new_with_client(client: SesClient) -> Self {
        SesEmailClient { client }
    }
}

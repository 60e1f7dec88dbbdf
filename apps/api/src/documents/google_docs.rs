//! Google Docs `documents.get` reader.
//!
//! Flattening rules: paragraph text runs are appended verbatim (they carry
//! their own newlines); table rows are visited in order, cells joined by a
//! tab and each row terminated by a newline.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use super::{DocumentError, DocumentStore};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub body: Body,
}

#[derive(Debug, Default, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

#[derive(Debug, Deserialize)]
pub struct StructuralElement {
    pub paragraph: Option<Paragraph>,
    pub table: Option<Table>,
}

#[derive(Debug, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphElement {
    pub text_run: Option<TextRun>,
}

#[derive(Debug, Deserialize)]
pub struct TextRun {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(default)]
    pub table_rows: Vec<TableRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(default)]
    pub table_cells: Vec<TableCell>,
}

#[derive(Debug, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// Flattens a content tree to plain text.
pub fn flatten(content: &[StructuralElement]) -> String {
    let mut out = String::new();
    for element in content {
        if let Some(paragraph) = &element.paragraph {
            for run in paragraph.elements.iter().filter_map(|e| e.text_run.as_ref()) {
                out.push_str(&run.content);
            }
        }
        if let Some(table) = &element.table {
            for row in &table.table_rows {
                let cells: Vec<String> = row
                    .table_cells
                    .iter()
                    .map(|cell| flatten(&cell.content).trim().to_string())
                    .collect();
                out.push_str(&cells.join("\t"));
                out.push('\n');
            }
        }
    }
    out
}

pub struct GoogleDocsStore {
    client: Client,
    api_url: String,
    document_id: String,
    access_token: String,
}

impl GoogleDocsStore {
    pub fn new(
        api_url: String,
        document_id: String,
        access_token: String,
    ) -> Result<Self, DocumentError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_url,
            document_id,
            access_token,
        })
    }
}

#[async_trait]
impl DocumentStore for GoogleDocsStore {
    async fn fetch_text(&self) -> Result<String, DocumentError> {
        let url = format!("{}/{}", self.api_url.trim_end_matches('/'), self.document_id);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DocumentError::Api {
                status: status.as_u16(),
                message: crate::llm_client::api_error_message(body),
            });
        }

        let raw = response.text().await?;
        let document: Document = serde_json::from_str(&raw)?;
        let text = flatten(&document.body.content);
        if text.trim().is_empty() {
            return Err(DocumentError::Empty);
        }

        info!("Fetched resume document ({} chars)", text.chars().count());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC_FIXTURE: &str = r#"{
        "documentId": "abc",
        "body": {
            "content": [
                {"sectionBreak": {}},
                {"paragraph": {"elements": [
                    {"textRun": {"content": "Jane Doe\n"}}
                ]}},
                {"paragraph": {"elements": [
                    {"textRun": {"content": "Backend "}},
                    {"textRun": {"content": "Engineer\n"}},
                    {"inlineObjectElement": {}}
                ]}},
                {"table": {"tableRows": [
                    {"tableCells": [
                        {"content": [{"paragraph": {"elements": [{"textRun": {"content": "Rust\n"}}]}}]},
                        {"content": [{"paragraph": {"elements": [{"textRun": {"content": "5 years\n"}}]}}]}
                    ]},
                    {"tableCells": [
                        {"content": [{"paragraph": {"elements": [{"textRun": {"content": "Go\n"}}]}}]},
                        {"content": [{"paragraph": {"elements": [{"textRun": {"content": "3 years\n"}}]}}]}
                    ]}
                ]}}
            ]
        }
    }"#;

    #[test]
    fn test_flatten_paragraphs_and_tables() {
        let doc: Document = serde_json::from_str(DOC_FIXTURE).unwrap();
        let text = flatten(&doc.body.content);
        assert_eq!(
            text,
            "Jane Doe\nBackend Engineer\nRust\t5 years\nGo\t3 years\n"
        );
    }

    #[test]
    fn test_flatten_empty_body() {
        let doc: Document = serde_json::from_str(r#"{"documentId": "x"}"#).unwrap();
        assert!(flatten(&doc.body.content).is_empty());
    }

    #[test]
    fn test_flatten_nested_table_in_cell() {
        let json = r#"[
            {"table": {"tableRows": [{"tableCells": [
                {"content": [{"table": {"tableRows": [{"tableCells": [
                    {"content": [{"paragraph": {"elements": [{"textRun": {"content": "a\n"}}]}}]},
                    {"content": [{"paragraph": {"elements": [{"textRun": {"content": "b\n"}}]}}]}
                ]}]}}]},
                {"content": [{"paragraph": {"elements": [{"textRun": {"content": "c\n"}}]}}]}
            ]}]}}
        ]"#;
        let content: Vec<StructuralElement> = serde_json::from_str(json).unwrap();
        assert_eq!(flatten(&content), "a\tb\tc\n");
    }
}

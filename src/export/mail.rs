use crate::lodas::GeneratedFile;

/// Subject of every export mail.
pub const SUBJECT: &str = "DATEV LODAS Export";

/// A file attached to the export mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Attachment file name.
    pub filename: String,
    /// Windows-1252 encoded file content.
    pub content: Vec<u8>,
}

/// Mail handed to the [`MailTransport`](super::MailTransport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportMail {
    /// Configured export address, trimmed.
    pub recipient: String,
    /// Always [`SUBJECT`].
    pub subject: String,
    /// HTML summary with one table row per file.
    pub html_body: String,
    /// One attachment per generated file.
    pub attachments: Vec<Attachment>,
}

impl ExportMail {
    /// Compose the mail for a set of generated files.
    pub fn compose(recipient: &str, files: &[GeneratedFile]) -> Self {
        Self {
            recipient: recipient.trim().to_string(),
            subject: SUBJECT.to_string(),
            html_body: summary_html(files),
            attachments: files
                .iter()
                .map(|f| Attachment {
                    filename: f.filename.clone(),
                    content: f.encode(),
                })
                .collect(),
        }
    }
}

fn summary_html(files: &[GeneratedFile]) -> String {
    let mut html = String::from("<p>DATEV LODAS export completed successfully.</p>");
    html.push_str("<table border='1' cellpadding='5' style='border-collapse: collapse;'>");
    html.push_str("<tr><th>Company</th><th>Employees</th><th>File</th></tr>");
    for file in files {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&file.company),
            file.employee_count,
            escape(&file.filename)
        ));
    }
    html.push_str("</table>");
    html.push_str("<p>Employees are marked as exported once this delivery is recorded.</p>");
    html
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(company: &str, employees: usize) -> GeneratedFile {
        GeneratedFile {
            filename: format!("DATEV_LODAS_{company}_20250317093005.txt"),
            company: company.into(),
            client_number: "00042".into(),
            employee_count: employees,
            dependent_count: 0,
            content: "[Allgemein]\r\nZiel=Lodas\r\n".into(),
            exported: Vec::new(),
            dropped: Vec::new(),
            path: None,
        }
    }

    #[test]
    fn compose_lists_every_file() {
        let mail = ExportMail::compose(" lohn@example.de ", &[file("Acme", 3), file("Beta", 1)]);
        assert_eq!(mail.recipient, "lohn@example.de");
        assert_eq!(mail.subject, "DATEV LODAS Export");
        assert_eq!(mail.attachments.len(), 2);
        assert!(mail.html_body.contains("<tr><td>Acme</td><td>3</td>"));
        assert!(mail.html_body.contains("<tr><td>Beta</td><td>1</td>"));
    }

    #[test]
    fn body_does_not_claim_flags_were_reset() {
        let mail = ExportMail::compose("x@example.de", &[file("Acme", 1)]);
        assert!(!mail.html_body.contains("have been reset"));
        assert!(mail.html_body.contains("once this delivery is recorded"));
    }

    #[test]
    fn company_names_are_escaped() {
        let mail = ExportMail::compose("x@example.de", &[file("A&B", 1)]);
        assert!(mail.html_body.contains("<td>A&amp;B</td>"));
    }
}

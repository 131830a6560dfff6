//! Standalone HTML5 document shell for rendered resumes.
//!
//! The preview iframe and the PDF export path both embed `RESUME_STYLESHEET`
//! verbatim so the exported page looks exactly like the preview. The document
//! references no external stylesheet, font or script.

pub const DOCUMENT_TITLE: &str = "Resume Preview";

/// Print-safe, mobile-responsive resume styles.
pub const RESUME_STYLESHEET: &str = r#"    body {
      font-family: 'Helvetica Neue', Arial, sans-serif;
      line-height: 1.6;
      color: #333;
      background-color: #fff;
      margin: 0;
      padding: 0;
      -webkit-text-size-adjust: 100%;
    }

    .container {
      width: 100%;
      max-width: 800px;
      margin: 0 auto;
      padding: 20px;
      box-sizing: border-box;
    }

    @media print {
      .container {
        width: 100%;
        max-width: none;
        padding: 0;
        margin: 0;
      }

      body {
        background-color: white;
        -webkit-print-color-adjust: exact !important;
        print-color-adjust: exact !important;
      }
    }

    @media screen and (max-width: 768px) {
      .container {
        padding: 10px;
      }

      h1, h2, h3 {
        margin-top: 8px;
        margin-bottom: 8px;
      }

      .resume-section {
        margin-bottom: 12px;
      }

      .resume-name {
        font-size: 24px;
      }

      .section-heading {
        font-size: 18px;
      }

      p, li {
        font-size: 14px;
      }
    }

    .resume-name {
      font-size: 28px;
      font-weight: bold;
      margin-bottom: 5px;
      color: #2563eb;
      border-bottom: 2px solid #2563eb;
      padding-bottom: 5px;
    }

    .section-heading {
      font-size: 20px;
      font-weight: bold;
      margin-top: 20px;
      margin-bottom: 10px;
      color: #1e40af;
      border-bottom: 1px solid #ddd;
      padding-bottom: 3px;
    }

    h3 {
      font-size: 16px;
      font-weight: bold;
      margin-top: 15px;
      margin-bottom: 5px;
      color: #333;
    }

    p {
      margin-top: 5px;
      margin-bottom: 5px;
    }

    .resume-section {
      margin-bottom: 20px;
    }

    hr {
      border: none;
      height: 1px;
      background-color: #ddd;
      margin: 20px 0;
    }

    .contact-info {
      margin-bottom: 15px;
      font-size: 14px;
    }

    .job-title {
      font-weight: bold;
      margin-bottom: 0;
    }

    .job-date {
      font-style: italic;
      color: #666;
      font-size: 14px;
      margin-top: 0;
    }

    .job-description {
      margin-top: 5px;
    }

    ul {
      margin-top: 5px;
      padding-left: 20px;
    }

    li {
      margin-bottom: 5px;
    }

    strong {
      font-weight: bold;
    }

    em {
      font-style: italic;
    }

    .resume-table {
      width: 100%;
      border-collapse: collapse;
      margin: 15px 0;
      overflow-x: auto;
      display: block;
    }

    @media screen and (min-width: 768px) {
      .resume-table {
        display: table;
      }
    }

    .resume-table th {
      background-color: #f2f2f2;
      font-weight: bold;
      text-align: left;
      padding: 8px;
      border: 1px solid #ddd;
    }

    .resume-table td {
      padding: 8px;
      border: 1px solid #ddd;
      word-break: break-word;
    }

    .resume-table tr:nth-child(even) {
      background-color: #f9f9f9;
    }

    @media screen and (max-width: 480px) {
      pre, code {
        white-space: pre-wrap;
        word-wrap: break-word;
        overflow-wrap: break-word;
        max-width: 100%;
      }

      .resume-table th,
      .resume-table td {
        padding: 5px;
        font-size: 13px;
      }
    }
"#;

/// Wraps an already-rendered body in the resume document shell.
pub fn wrap_document(body: &str) -> String {
    let mut doc = String::with_capacity(body.len() + RESUME_STYLESHEET.len() + 512);
    doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    doc.push_str("  <meta charset=\"UTF-8\">\n");
    doc.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0, maximum-scale=1.0\">\n",
    );
    doc.push_str("  <title>");
    doc.push_str(DOCUMENT_TITLE);
    doc.push_str("</title>\n  <style>\n");
    doc.push_str(RESUME_STYLESHEET);
    doc.push_str("  </style>\n</head>\n<body>\n  <div class=\"container\">\n");
    doc.push_str(body);
    doc.push_str("\n  </div>\n</body>\n</html>\n");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shell() {
        let doc = wrap_document("<p>hi</p>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<div class=\"container\">\n<p>hi</p>\n  </div>"));
        assert!(doc.ends_with("</html>\n"));
    }

    #[test]
    fn test_stylesheet_is_embedded_and_self_contained() {
        let doc = wrap_document("");
        assert!(doc.contains(RESUME_STYLESHEET));
        for class in [".resume-name", ".section-heading", ".resume-table", "@media print"] {
            assert!(RESUME_STYLESHEET.contains(class), "missing {class}");
        }
        assert!(!doc.contains("<link"));
        assert!(!doc.contains("<script"));
        assert!(!doc.contains("http://") && !doc.contains("https://"));
    }

    #[test]
    fn test_stylesheet_styles_resume_sections_and_narrow_screens() {
        for class in [
            ".resume-section",
            ".contact-info",
            ".job-title",
            ".job-date",
            ".job-description",
        ] {
            assert!(RESUME_STYLESHEET.contains(class), "missing {class}");
        }
        let narrow = RESUME_STYLESHEET
            .find("@media screen and (max-width: 480px)")
            .expect("narrow-screen block");
        let rules = &RESUME_STYLESHEET[narrow..];
        assert!(rules.contains("pre, code {"));
        assert!(rules.contains("white-space: pre-wrap;"));
        assert!(rules.contains("overflow-wrap: break-word;"));
    }
}

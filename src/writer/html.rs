//! Standalone HTML output
//!
//! Wraps the Vega-Lite JSON in a page that renders it with vega-embed.

use super::{VegaLiteWriter, Writer};
use crate::{Chart, Result};

const VEGA_VERSION: &str = "5";
const VEGA_LITE_VERSION: &str = "5";
const VEGA_EMBED_VERSION: &str = "6";

/// HTML writer backed by [`VegaLiteWriter`]
#[derive(Default)]
pub struct HtmlWriter {
    vegalite: VegaLiteWriter,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Writer for HtmlWriter {
    type Output = String;

    fn write(&self, chart: &Chart) -> Result<String> {
        // `</` inside the JSON would terminate the script element early
        let spec = self.vegalite.write(chart)?.replace("</", "<\\/");
        let title = html_escape(chart.title().unwrap_or("Chart"));

        Ok(format!(
            r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script src="https://cdn.jsdelivr.net/npm/vega@{VEGA_VERSION}"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-lite@{VEGA_LITE_VERSION}"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-embed@{VEGA_EMBED_VERSION}"></script>
</head>
<body>
  <div id="vis"></div>
  <script type="text/javascript">
    vegaEmbed("#vis", {spec});
  </script>
</body>
</html>
"##
        ))
    }

    fn validate(&self, chart: &Chart) -> Result<()> {
        self.vegalite.validate(chart)
    }
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

//! Generator (home) page
//!
//! Lists every registered university as a clickable card. The embedded
//! script computes links locally from the clicked id, using the same
//! prefix constants the server resolves with, so no round trip is needed
//! and the two formulas stay identical.

use crate::links::{DEEP_LINK_PREFIX, WEB_LINK_PATH};
use crate::registry::UniversityRegistry;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>UniLinker Deep Link Generator</title>
  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      min-height: 100vh;
      display: flex;
      justify-content: center;
      align-items: center;
      padding: 20px;
    }
    .container {
      background: white;
      border-radius: 20px;
      padding: 40px;
      max-width: 600px;
      width: 100%;
      box-shadow: 0 20px 60px rgba(0,0,0,0.3);
    }
    h1 { color: #667eea; margin-bottom: 10px; font-size: 32px; }
    .subtitle { color: #666; margin-bottom: 30px; font-size: 16px; }
    .university-grid { display: grid; gap: 15px; margin-bottom: 30px; }
    .university-card {
      border: 2px solid #e0e0e0;
      border-radius: 12px;
      padding: 20px;
      cursor: pointer;
      transition: all 0.3s ease;
      text-align: left;
    }
    .university-card:hover {
      border-color: #667eea;
      box-shadow: 0 5px 15px rgba(102, 126, 234, 0.2);
      transform: translateY(-2px);
    }
    .university-name { font-weight: bold; font-size: 18px; color: #333; margin-bottom: 5px; }
    .university-location { color: #888; font-size: 14px; }
    .link-result {
      background: #f5f5f5;
      border-radius: 8px;
      padding: 15px;
      margin-top: 20px;
      display: none;
    }
    .link-result.show { display: block; }
    .link-text { word-break: break-all; color: #667eea; font-weight: 500; margin-bottom: 10px; }
    .button-group { display: flex; gap: 10px; }
    .btn {
      padding: 10px 20px;
      border: none;
      border-radius: 8px;
      cursor: pointer;
      font-weight: 500;
      transition: all 0.3s ease;
    }
    .btn-primary { background: #667eea; color: white; }
    .btn-primary:hover { background: #5568d3; }
    .btn-secondary { background: #e0e0e0; color: #333; }
    .btn-secondary:hover { background: #d0d0d0; }
    .info-box {
      background: #e3f2fd;
      border-left: 4px solid #2196f3;
      padding: 15px;
      border-radius: 4px;
      margin-top: 20px;
    }
    .info-box h3 { color: #1976d2; margin-bottom: 8px; font-size: 16px; }
    .info-box code {
      background: #fff;
      padding: 2px 6px;
      border-radius: 3px;
      font-family: monospace;
      font-size: 13px;
    }
  </style>
</head>
<body>
  <div class="container">
    <h1>UniLinker</h1>
    <p class="subtitle">Generate deep links to university pages</p>

    <div class="university-grid">
"#;

const RESULT_PANEL: &str = r#"    </div>

    <div id="linkResult" class="link-result">
      <div class="link-text" id="linkText"></div>
      <div class="button-group">
        <button class="btn btn-primary" onclick="copyLink()">Copy Link</button>
        <button class="btn btn-secondary" onclick="openLink()">Open in App</button>
      </div>
    </div>

    <div class="info-box">
      <h3>Testing Instructions</h3>
      <p><strong>Option 1: Using ADB (Android Emulator/Device)</strong></p>
      <p>Run: <code>adb shell am start -W -a android.intent.action.VIEW -d "unilinker://university/harvard"</code></p>
      <br>
      <p><strong>Option 2: HTTP Redirect</strong></p>
      <p>Click a university above, then click "Open in App"</p>
    </div>
  </div>
"#;

const PAGE_FOOT: &str = "</body>\n</html>\n";

/// Render the home page for the current registry contents.
pub fn generator_page(registry: &UniversityRegistry) -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str(PAGE_HEAD);
    for (id, university) in registry.iter() {
        html.push_str(&format!(
            r#"      <div class="university-card" onclick="generateLink('{id}')">
        <div class="university-name">{name}</div>
        <div class="university-location">{location}</div>
      </div>
"#,
            name = university.name,
            location = university.location,
        ));
    }
    html.push_str(RESULT_PANEL);
    html.push_str(&link_script());
    html.push_str(PAGE_FOOT);
    html
}

/// Client-side copy of the link formulas, built from the canonical
/// server-side constants.
fn link_script() -> String {
    format!(
        r"  <script>
    let currentLink = '';

    function generateLink(universityId) {{
      const deepLink = '{DEEP_LINK_PREFIX}' + universityId;
      const webLink = window.location.origin + '{WEB_LINK_PATH}' + universityId;

      currentLink = deepLink;
      document.getElementById('linkText').textContent = webLink;
      document.getElementById('linkResult').classList.add('show');
    }}

    function copyLink() {{
      const linkText = document.getElementById('linkText').textContent;
      navigator.clipboard.writeText(linkText).then(() => {{
        alert('Link copied to clipboard!');
      }});
    }}

    function openLink() {{
      if (currentLink) {{
        window.location.href = currentLink;
      }}
    }}
  </script>
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_registered_university() {
        let registry = UniversityRegistry::seed();
        let html = generator_page(&registry);
        assert!(html.contains("Harvard University"));
        assert!(html.contains("Bangladesh University of Engineering and Technology"));
        assert!(html.contains("United International University"));
        for id in registry.ids() {
            assert!(html.contains(&format!("generateLink('{id}')")));
        }
    }

    #[test]
    fn test_script_uses_canonical_formulas() {
        let registry = UniversityRegistry::seed();
        let html = generator_page(&registry);
        assert!(html.contains("'unilinker://university/' + universityId"));
        assert!(html.contains("window.location.origin + '/uni/' + universityId"));
    }
}

//! Deep-link landing page
//!
//! Loaded from a shared web link (`/uni/{id}`). On load the page stores the
//! deferred deep-link hint, hands the browser off to the custom-scheme URI,
//! and shows a spinner. If nothing suggests the app took over within the
//! timeout, an install panel is revealed instead.

use crate::registry::University;

/// How long to wait for the app before showing the install fallback.
pub const APP_LAUNCH_TIMEOUT_MS: u32 = 2500;

/// Storage key for the deferred deep-link URI.
///
/// Written for a later-installed app to read back; this server never
/// consumes it.
pub const DEFERRED_LINK_KEY: &str = "unilinker_deferred_link";

/// Storage key for the deferred university identifier.
pub const DEFERRED_UNIVERSITY_KEY: &str = "unilinker_deferred_university";

const PAGE_STYLE: &str = r#"  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      height: 100vh;
      display: flex;
      justify-content: center;
      align-items: center;
      color: white;
      text-align: center;
      padding: 20px;
    }
    .container { max-width: 400px; }
    h1 { font-size: 28px; margin-bottom: 20px; }
    p { font-size: 16px; opacity: 0.9; margin-bottom: 30px; }
    .loader {
      border: 4px solid rgba(255,255,255,0.3);
      border-radius: 50%;
      border-top: 4px solid white;
      width: 40px;
      height: 40px;
      animation: spin 1s linear infinite;
      margin: 0 auto;
    }
    @keyframes spin {
      0% { transform: rotate(0deg); }
      100% { transform: rotate(360deg); }
    }
    .fallback { margin-top: 30px; font-size: 14px; opacity: 0.8; display: none; }
    .fallback.show { display: block; }
    .fallback a { color: white; text-decoration: underline; }
    .install-btn {
      display: inline-block;
      margin-top: 10px;
      padding: 12px 24px;
      background: white;
      color: #667eea;
      border-radius: 8px;
      text-decoration: none;
      font-weight: 600;
    }
  </style>
"#;

/// Render the landing page for a resolved university.
///
/// The id must already be canonical (lowercase); callers get it from the
/// registry lookup.
pub fn landing_page(id: &str, university: &University, deep_link: &str) -> String {
    let mut html = String::with_capacity(4 * 1024);
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Opening {name} in UniLinker...</title>
"#,
        name = university.name,
    ));
    html.push_str(PAGE_STYLE);
    html.push_str(&launch_script(id, deep_link));
    html.push_str(&format!(
        r#"</head>
<body>
  <div class="container">
    <h1>Opening {name}</h1>
    <p id="message">Launching UniLinker app...</p>
    <div class="loader" id="spinner"></div>
    <div class="fallback" id="fallback">
      <p>It looks like the UniLinker app is not installed.</p>
      <a class="install-btn" href="/download-apk">Get the app</a>
      <p style="margin-top: 20px;">Manual deep link:</p>
      <a href="{deep_link}">{deep_link}</a>
    </div>
  </div>
</body>
</html>
"#,
        name = university.name,
    ));
    html
}

/// Deferred-link storage write plus app-launch attempt with a timed
/// install fallback. The visibility change is a best-effort hint that the
/// app intercepted the navigation, nothing acknowledges the handoff.
fn launch_script(id: &str, deep_link: &str) -> String {
    format!(
        r"  <script>
    var deepLink = '{deep_link}';

    try {{
      localStorage.setItem('{DEFERRED_LINK_KEY}', deepLink);
      localStorage.setItem('{DEFERRED_UNIVERSITY_KEY}', '{id}');
    }} catch (e) {{
      // Storage unavailable (private mode); the hint is optional.
    }}

    var appOpened = false;
    document.addEventListener('visibilitychange', function () {{
      if (document.hidden) {{
        appOpened = true;
      }}
    }});

    window.location.href = deepLink;

    setTimeout(function () {{
      if (!appOpened) {{
        document.getElementById('spinner').style.display = 'none';
        document.getElementById('message').textContent = 'The app did not open automatically.';
        document.getElementById('fallback').classList.add('show');
      }}
    }}, {APP_LAUNCH_TIMEOUT_MS});
  </script>
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links;
    use crate::registry::UniversityRegistry;

    fn render(id: &str) -> String {
        let registry = UniversityRegistry::seed();
        let (canonical, university) = registry.lookup(id).expect("registered id");
        let deep = links::deep_link(&canonical);
        landing_page(&canonical, university, &deep)
    }

    #[test]
    fn test_contains_deep_link_and_name() {
        let html = render("buet");
        assert!(html.contains("unilinker://university/buet"));
        assert!(html.contains("Bangladesh University of Engineering and Technology"));
    }

    #[test]
    fn test_writes_deferred_storage_keys() {
        let html = render("harvard");
        assert!(html.contains("localStorage.setItem('unilinker_deferred_link', deepLink)"));
        assert!(html.contains("localStorage.setItem('unilinker_deferred_university', 'harvard')"));
    }

    #[test]
    fn test_fallback_timeout_and_install_link() {
        let html = render("uiu");
        assert!(html.contains("}, 2500);"));
        assert!(html.contains(r#"href="/download-apk""#));
        assert!(html.contains("visibilitychange"));
    }
}

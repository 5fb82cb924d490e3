//! APK install instructions page
//!
//! Documentation only, no binary is served. Parameterized by the
//! originating host so the example link matches the deployment.

use crate::links::WEB_LINK_PATH;

const PAGE_STYLE: &str = r#"  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
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
    h1 { color: #667eea; margin-bottom: 10px; font-size: 28px; }
    h2 { color: #333; margin: 20px 0 10px; font-size: 18px; }
    p, li { color: #555; font-size: 15px; line-height: 1.6; }
    ol { margin-left: 20px; }
    code {
      background: #f5f5f5;
      padding: 2px 6px;
      border-radius: 3px;
      font-family: monospace;
      font-size: 13px;
      word-break: break-all;
    }
    .note {
      background: #fff3e0;
      border-left: 4px solid #ff9800;
      padding: 15px;
      border-radius: 4px;
      margin-top: 20px;
      font-size: 14px;
    }
  </style>
"#;

/// Render the manual build/install instructions.
pub fn download_page(host: &str) -> String {
    let mut html = String::with_capacity(4 * 1024);
    html.push_str(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Install the UniLinker App</title>
"#,
    );
    html.push_str(PAGE_STYLE);
    html.push_str(&format!(
        r#"</head>
<body>
  <div class="container">
    <h1>Install the UniLinker App</h1>
    <p>The app is not distributed through an app store yet. Build and
    install it manually:</p>

    <h2>Build the APK</h2>
    <ol>
      <li>Clone the UniLinker app repository.</li>
      <li>Run <code>flutter build apk --release</code> in the project root.</li>
      <li>The APK lands in <code>build/app/outputs/flutter-apk/app-release.apk</code>.</li>
    </ol>

    <h2>Install on a device</h2>
    <ol>
      <li>Enable installation from unknown sources in Android settings.</li>
      <li>Copy the APK to the device and open it, or run
      <code>adb install app-release.apk</code>.</li>
    </ol>

    <h2>Resume your link</h2>
    <p>After installing, open a shared link such as
    <code>http://{host}{WEB_LINK_PATH}harvard</code> again, or launch the app:
    it can pick up the destination saved by the landing page.</p>

    <div class="note">
      This page is documentation only. No binaries are served from here.
    </div>
  </div>
</body>
</html>
"#,
    ));
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions_host_in_example_link() {
        let html = download_page("localhost:3000");
        assert!(html.contains("http://localhost:3000/uni/harvard"));
    }

    #[test]
    fn test_is_documentation_not_a_binary() {
        let html = download_page("example.com");
        assert!(html.contains("adb install"));
        assert!(html.contains("No binaries are served"));
    }
}

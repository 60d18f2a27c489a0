use anyhow::Result;
use tempfile::TempDir;
use wine_catalog::server::Publisher;

#[tokio::test]
async fn test_serves_written_page() -> Result<()> {
    let dir = TempDir::new()?;
    let page = "<html><body>Каталог вин</body></html>";
    std::fs::write(dir.path().join("index.html"), page)?;

    let publisher = Publisher::bind(dir.path(), "127.0.0.1", 0).await?;
    let addr = publisher.local_addr()?;
    tokio::spawn(publisher.serve());

    let body = reqwest::get(format!("http://{}/index.html", addr))
        .await?
        .text()
        .await?;
    assert_eq!(body, page);

    // the directory root resolves to the page as well
    let root = reqwest::get(format!("http://{}/", addr)).await?;
    assert_eq!(root.status(), 200);
    assert_eq!(root.text().await?, page);

    Ok(())
}

#[tokio::test]
async fn test_unknown_path_is_404_and_does_not_kill_the_listener() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("index.html"), "ok")?;

    let publisher = Publisher::bind(dir.path(), "127.0.0.1", 0).await?;
    let addr = publisher.local_addr()?;
    tokio::spawn(publisher.serve());

    let missing = reqwest::get(format!("http://{}/no-such-file.css", addr)).await?;
    assert_eq!(missing.status(), 404);

    // listener survives the 404
    let alive = reqwest::get(format!("http://{}/index.html", addr)).await?;
    assert_eq!(alive.status(), 200);

    Ok(())
}

#[tokio::test]
async fn test_mime_type_inferred_from_extension() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("index.html"), "<html></html>")?;
    std::fs::write(dir.path().join("style.css"), "body {}")?;

    let publisher = Publisher::bind(dir.path(), "127.0.0.1", 0).await?;
    let addr = publisher.local_addr()?;
    tokio::spawn(publisher.serve());

    let html = reqwest::get(format!("http://{}/index.html", addr)).await?;
    let html_type = html.headers()["content-type"].to_str()?.to_string();
    assert!(html_type.starts_with("text/html"));

    let css = reqwest::get(format!("http://{}/style.css", addr)).await?;
    let css_type = css.headers()["content-type"].to_str()?.to_string();
    assert!(css_type.starts_with("text/css"));

    Ok(())
}

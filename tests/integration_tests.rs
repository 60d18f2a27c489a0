use tempfile::TempDir;
use wine_catalog::{CliConfig, LocalStorage, PublishEngine, SitePipeline};

const WINE_CSV: &str = "Категория,Название,Цена\nКрасное,Абрау-Дюрсо,450\nБелое,Шато Тамань,N/A\nКрасное,Фанагория,520\n";

const TEMPLATE: &str = "<h2>Уже {{ total_years }} с вами</h2>\n{% for category, wines in grouped_wines %}<h3>{{ category }}</h3>{% for wine in wines %}<p>{{ wine[\"Название\"] }}</p>{% endfor %}{% endfor %}\n";

fn test_config(dir: &TempDir, data_file: &str) -> CliConfig {
    CliConfig {
        data_path: data_file.to_string(),
        template_path: dir
            .path()
            .join("template.html")
            .to_str()
            .unwrap()
            .to_string(),
        category_field: "Категория".to_string(),
        founded_year: 1920,
        output_dir: dir.path().to_str().unwrap().to_string(),
        bind: "127.0.0.1".to_string(),
        port: 0,
        no_serve: true,
        monitor: false,
        verbose: false,
    }
}

async fn build_site(dir: &TempDir, data_file: &str) -> Result<String, wine_catalog::SiteError> {
    let config = test_config(dir, data_file);
    let storage = LocalStorage::new(dir.path());
    let pipeline = SitePipeline::new(storage, config);
    let engine = PublishEngine::new(pipeline);

    engine.run().await
}

#[tokio::test]
async fn test_end_to_end_csv_build() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("wine.csv"), WINE_CSV).unwrap();
    std::fs::write(dir.path().join("template.html"), TEMPLATE).unwrap();

    let output_path = build_site(&dir, "wine.csv").await.unwrap();
    assert!(output_path.ends_with("index.html"));

    let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();

    // categories appear in encounter order, not alphabetical
    let red = html.find("<h3>Красное</h3>").unwrap();
    let white = html.find("<h3>Белое</h3>").unwrap();
    assert!(red < white);

    // every row made it into exactly one group
    assert!(html.contains("Абрау-Дюрсо"));
    assert!(html.contains("Шато Тамань"));
    assert!(html.contains("Фанагория"));

    // age label is pluralized
    assert!(html.contains("Уже"));
    let label_ok =
        html.contains(" лет") || html.contains(" год") || html.contains(" года");
    assert!(label_ok);
}

#[tokio::test]
async fn test_end_to_end_build_is_idempotent() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("wine.csv"), WINE_CSV).unwrap();
    std::fs::write(dir.path().join("template.html"), TEMPLATE).unwrap();

    build_site(&dir, "wine.csv").await.unwrap();
    let first = std::fs::read(dir.path().join("index.html")).unwrap();

    build_site(&dir, "wine.csv").await.unwrap();
    let second = std::fs::read(dir.path().join("index.html")).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_end_to_end_xlsx_build() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("template.html"), TEMPLATE).unwrap();

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "Категория").unwrap();
    worksheet.write_string(0, 1, "Название").unwrap();
    for (i, (category, name)) in [
        ("Красное", "Абрау-Дюрсо"),
        ("Белое", "Шато Тамань"),
        ("Красное", "Фанагория"),
    ]
    .iter()
    .enumerate()
    {
        worksheet.write_string(i as u32 + 1, 0, *category).unwrap();
        worksheet.write_string(i as u32 + 1, 1, *name).unwrap();
    }
    workbook
        .save(dir.path().join("wine.xlsx").to_str().unwrap())
        .unwrap();

    build_site(&dir, "wine.xlsx").await.unwrap();

    let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    let red = html.find("<h3>Красное</h3>").unwrap();
    let white = html.find("<h3>Белое</h3>").unwrap();
    assert!(red < white);
    assert!(html.contains("Фанагория"));
}

#[tokio::test]
async fn test_missing_input_file_writes_no_output() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("template.html"), TEMPLATE).unwrap();

    let result = build_site(&dir, "wine.csv").await;
    assert!(result.is_err());
    assert!(!dir.path().join("index.html").exists());
}

#[tokio::test]
async fn test_missing_category_column_fails_build() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("wine.csv"), "Name,Price\nAbrau,450\n").unwrap();
    std::fs::write(dir.path().join("template.html"), TEMPLATE).unwrap();

    let result = build_site(&dir, "wine.csv").await;
    assert!(result.is_err());
    assert!(!dir.path().join("index.html").exists());
}

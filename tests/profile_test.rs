use anyhow::Result;
use httpmock::prelude::*;
use listing_scrape::utils::validation::Validate;
use listing_scrape::{LocalStorage, PageScrapePipeline, ScrapeEngine, SiteProfile};
use tempfile::TempDir;

#[tokio::test]
async fn test_profile_driven_scrape_with_custom_selectors() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/deals")
            .header("user-agent", "deal-bot/2.0");
        then.status(200).body(
            r#"
            <ul>
                <li class="deal-card">
                    <h2 class="deal-title">Custom Deal</h2>
                    <p class="deal-cost">$12.00</p>
                    <a class="deal-link" href="/d/custom-deal">grab it</a>
                </li>
                <li class="deal-card">
                    <h2 class="deal-title">Another Deal</h2>
                    <p class="deal-cost">$8.00</p>
                    <a class="deal-link" href="/d/another-deal">grab it</a>
                </li>
            </ul>
        "#,
        );
    });

    let toml_content = format!(
        r#"
[site]
url = "{}"
user_agent = "deal-bot/2.0"
timeout_seconds = 5

[selectors]
item = ".deal-card"
name = ".deal-title"
price = ".deal-cost"
link = "a.deal-link"

[output]
path = "{}"
format = "tsv"
"#,
        server.url("/deals"),
        output_path
    );

    let profile_path = temp_dir.path().join("deals.toml");
    std::fs::write(&profile_path, toml_content)?;

    let profile = SiteProfile::from_file(&profile_path)?;
    profile.validate()?;

    let selectors = profile.selector_set()?;
    let storage = LocalStorage::new(profile.output.path.clone());
    let pipeline = PageScrapePipeline::new(storage, profile, selectors)?;
    let output_file = ScrapeEngine::new(pipeline).run().await?;

    page_mock.assert();
    assert!(output_file.ends_with("scraped_data.tsv"));

    let tsv_content = std::fs::read_to_string(temp_dir.path().join("scraped_data.tsv"))?;
    let lines: Vec<&str> = tsv_content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Name\tPrice\tLink");
    assert_eq!(lines[1], "Custom Deal\t$12.00\t/d/custom-deal");
    assert_eq!(lines[2], "Another Deal\t$8.00\t/d/another-deal");

    Ok(())
}

#[tokio::test]
async fn test_profile_without_selector_block_uses_built_ins() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/plain");
        then.status(200).body(
            r#"
            <div class="product-item">
                <span class="product-name">Widget Pro</span>
                <span class="product-price">$9.99</span>
                <a href="/p/widget-pro">view</a>
            </div>
        "#,
        );
    });

    let toml_content = format!(
        "[site]\nurl = \"{}\"\n\n[output]\npath = \"{}\"\n",
        server.url("/plain"),
        output_path
    );

    let profile = SiteProfile::from_toml_str(&toml_content)?;
    let selectors = profile.selector_set()?;
    let storage = LocalStorage::new(profile.output.path.clone());
    let pipeline = PageScrapePipeline::new(storage, profile, selectors)?;
    ScrapeEngine::new(pipeline).run().await?;

    let csv_content = std::fs::read_to_string(temp_dir.path().join("scraped_data.csv"))?;
    assert_eq!(csv_content, "Name,Price,Link\nWidget Pro,$9.99,/p/widget-pro\n");

    Ok(())
}

#[tokio::test]
async fn test_profile_env_var_substitution_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/from-env");
        then.status(200).body(
            r#"
            <div class="product-item">
                <span class="product-name">Env Widget</span>
                <span class="product-price">$1.23</span>
                <a href="/p/env-widget">view</a>
            </div>
        "#,
        );
    });

    // Unique name so parallel tests cannot race on it.
    std::env::set_var("LISTING_SCRAPE_TEST_PAGE_URL", server.url("/from-env"));

    let toml_content = format!(
        "[site]\nurl = \"${{LISTING_SCRAPE_TEST_PAGE_URL}}\"\n\n[output]\npath = \"{}\"\n",
        output_path
    );

    let profile = SiteProfile::from_toml_str(&toml_content)?;
    assert_eq!(profile.site.url, server.url("/from-env"));

    let selectors = profile.selector_set()?;
    let storage = LocalStorage::new(profile.output.path.clone());
    let pipeline = PageScrapePipeline::new(storage, profile, selectors)?;
    ScrapeEngine::new(pipeline).run().await?;

    page_mock.assert();
    std::env::remove_var("LISTING_SCRAPE_TEST_PAGE_URL");

    let csv_content = std::fs::read_to_string(temp_dir.path().join("scraped_data.csv"))?;
    assert!(csv_content.contains("Env Widget,$1.23,/p/env-widget"));

    Ok(())
}

#[test]
fn test_profile_with_bad_url_fails_validation() {
    let toml_content = r#"
[site]
url = "not-a-url"

[output]
path = "./output"
"#;

    let profile = SiteProfile::from_toml_str(toml_content).unwrap();
    assert!(profile.validate().is_err());
}

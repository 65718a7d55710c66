use anyhow::Context;
use clap::Parser;
use mabra_site::core::{ConfigProvider, ContactField, ContactForm, PageView};
use mabra_site::utils::logger;
use mabra_site::{
    render_home_page_with, ApiClient, CliConfig, Command, HomePage, LocalOutput, RenderOptions,
    SiteError, SiteSettings,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting mabra-site CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => fail("Configuration validation failed", &e),
    };

    let client = match ApiClient::from_config(&settings) {
        Ok(client) => client,
        Err(e) => fail("Could not build the API client", &e),
    };

    match &config.command {
        Command::Render { .. } => render(&settings, &client).await?,
        Command::Contact { .. } => {
            let mut form = ContactForm::new();
            if let Some(submission) = config.contact_submission() {
                form.set(ContactField::Name, submission.name);
                form.set(ContactField::Email, submission.email);
                if let Some(phone) = submission.phone {
                    form.set(ContactField::Phone, phone);
                }
                if let Some(company) = submission.company {
                    form.set(ContactField::Company, company);
                }
                form.set(ContactField::Service, submission.service);
                form.set(ContactField::Message, submission.message);
            }

            match form.submit(&client).await {
                Ok(response) => {
                    tracing::info!("✅ Contact message delivered (id: {:?})", response.id);
                    println!("✅ {}", response.message);
                }
                Err(e) => {
                    let message = form
                        .result()
                        .map(|r| r.message.clone())
                        .unwrap_or_else(|| e.to_string());
                    tracing::error!("❌ Contact submission failed: {}", e);
                    eprintln!("❌ {}", message);
                    std::process::exit(2);
                }
            }
        }
    }

    Ok(())
}

async fn render(settings: &SiteSettings, client: &ApiClient) -> anyhow::Result<()> {
    let mut view = PageView::new(settings.page_path(), settings.page_title());
    if !settings.referrer().is_empty() {
        view = view.with_referrer(settings.referrer());
    }

    // 掛載：記錄瀏覽並抓取三個清單，失敗時改用內建內容
    let mut page = HomePage::new(view);
    page.mount(client).await;

    let options = RenderOptions {
        api_base: Some(settings.api_base_url().to_string()),
        ..Default::default()
    };
    let html = render_home_page_with(&page, &options);

    let output = LocalOutput::new(settings.output_path());
    let path = output
        .write_file("index.html", html.as_bytes())
        .await
        .with_context(|| format!("Writing index.html under {} failed", settings.output_path()))?;

    tracing::info!("📁 Output saved to: {}", path.display());
    println!("✅ Site rendered");
    println!("📁 Output saved to: {}", path.display());
    Ok(())
}

fn fail(context: &str, e: &SiteError) -> ! {
    tracing::error!("❌ {}: {}", context, e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.display_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(1);
}

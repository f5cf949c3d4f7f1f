// dokon-admin/examples/admin_demo.rs
// Drive the admin core against a live backend: run the access gate,
// land at the root, and walk one level down.

use dokon_admin::{AccessState, AdminApp, AdminConfig, NodeView};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Optional deep link as the first argument, e.g.
    //   cargo run --example admin_demo -- "https://admin.dokon.uz/panel/5551234"
    let deep_link = std::env::args().nth(1);

    let config = AdminConfig::from_env();
    tracing::info!(base_url = %config.base_url, "starting admin core");

    let mut app = AdminApp::new(config)?;
    match app.start(deep_link.as_deref()).await {
        AccessState::Authorized(user) => {
            tracing::info!(user = %user.firstname, chat_id = user.chat_id, "authorized");
        }
        AccessState::Unauthorized { reason } => {
            tracing::warn!(%reason, "access denied");
            return Ok(());
        }
        AccessState::Failed(err) => {
            tracing::error!(error = %err, "gate check failed, reload to retry");
            anyhow::bail!("gate check failed: {err}");
        }
    }

    print_view(app.navigator().view());

    // Descend into the first root category, if any.
    let first = match app.navigator().view() {
        NodeView::Categories(items) => items
            .first()
            .map(|c| (c.id.clone(), c.name_uz.clone())),
        NodeView::Products(_) => None,
    };
    if let Some((id, name)) = first {
        app.navigator_mut().navigate_to(&id, &name).await?;
        tracing::info!(%name, "descended one level");
        print_view(app.navigator().view());
    }

    Ok(())
}

fn print_view(view: &NodeView) {
    match view {
        NodeView::Categories(items) => {
            for c in items {
                println!("[{}] {} (order {})", c.id, c.name_uz, c.order_index);
            }
        }
        NodeView::Products(items) => {
            let now = chrono::Utc::now();
            for p in items {
                println!(
                    "[{}] {} - {} so'm ({} variants)",
                    p.id,
                    p.name_uz,
                    p.effective_price(now),
                    p.variants.len()
                );
            }
        }
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::{Extension, Router};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use marketing_site::{config::SiteConfig, services::news, state::AppState, App};
    use tracing_subscriber::EnvFilter;

    // Load env vars
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize database
    let db = match marketing_site::db::create_pool(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("could not open {}: {e}", config.database_url);
            std::process::exit(1);
        }
    };
    if let Err(e) = marketing_site::db::run_migrations(&db).await {
        tracing::error!("migrations failed: {e}");
        std::process::exit(1);
    }

    // News housekeeping never blocks startup
    if let Some(path) = &config.news_seed_path {
        match news::import_seed_file(&db, path).await {
            Ok(summary) => tracing::info!(
                inserted = summary.inserted,
                duplicates = summary.duplicates,
                solar = summary.solar,
                ict = summary.ict,
                "imported news seed"
            ),
            Err(e) => tracing::warn!("news seed skipped: {e}"),
        }
    }
    if let Err(e) =
        news::cleanup_old_articles(&db, config.news_retention_days, chrono::Utc::now()).await
    {
        tracing::warn!("news cleanup failed: {e}");
    }
    match news::active_counts(&db).await {
        Ok(counts) => tracing::info!(ict = counts.ict, solar = counts.solar, "active news articles"),
        Err(e) => tracing::warn!("could not count news articles: {e}"),
    }

    let state = AppState { db, config };

    // Leptos config
    let conf = get_configuration(None).expect("Failed to load Leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    // Build router
    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(Extension(state))
        .with_state(leptos_options);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("could not bind {addr}: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!("listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("server error: {e}");
    }
}

#[cfg(feature = "ssr")]
fn shell(options: leptos::config::LeptosOptions) -> impl leptos::IntoView {
    use leptos::prelude::*;
    use leptos_meta::*;
    use marketing_site::App;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client-side entry point handled by hydrate() in lib.rs
}

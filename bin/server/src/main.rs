#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::{Extension, Router, middleware, routing::get};
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use lichtpunt_blog::{ContentfulClient, InMemoryBlog, SourceKind};
    use lichtpunt_contact::WebhookSink;
    use lichtpunt_server::{
        app::App,
        config::ServerConfig,
        routes,
        services::{SharedBlogSource, SharedContactSink},
    };
    use std::sync::Arc;
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    let contact_sink: SharedContactSink = Arc::new(
        WebhookSink::new(config.contact.webhook_url.clone(), config.contact.timeout())
            .expect("failed to build contact webhook client"),
    );

    let blog_source: SharedBlogSource = match config.blog.source {
        SourceKind::Cms => {
            // Missing credentials are fatal; the report lists every absent variable.
            let credentials = config
                .cms
                .credentials()
                .expect("incomplete CMS configuration");
            tracing::info!(space = %credentials.space_id, "Using CMS blog source");
            Arc::new(ContentfulClient::new(credentials).expect("failed to build CMS client"))
        }
        SourceKind::Memory => {
            tracing::warn!("Using built-in sample articles as blog source");
            Arc::new(InMemoryBlog::sample())
        }
    };

    let conf = get_configuration(None).expect("failed to get leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .route("/sitemap.xml", get(routes::sitemap_xml))
        .route("/robots.txt", get(routes::robots_txt))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .nest_service("/pkg", ServeDir::new("target/site/pkg"))
        .layer(middleware::from_fn_with_state(
            config.site.clone(),
            routes::remember_locale,
        ))
        // Server functions pick these up as request extensions
        .layer(Extension(contact_sink))
        .layer(Extension(blog_source))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}

#[cfg(feature = "ssr")]
fn shell(options: leptos::prelude::LeptosOptions) -> impl leptos::prelude::IntoView {
    use leptos::prelude::*;
    use leptos_meta::*;
    use lichtpunt_server::app::App;

    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href="/pkg/lichtpunt.css"/>
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
    // Only used for WASM builds; hydration happens in lib.rs
}

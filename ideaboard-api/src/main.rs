mod routes;

use axum::routing::post;
use axum::Router;
use ideaboard_app::AppContext;
use ideaboard_ui::pages::{ListIdeasFn, SubmitIdeaFn, UpvoteIdeaFn};
use ideaboard_ui::App;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use leptos_meta::MetaTags;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;

    // PORT overrides only the port half of the configured site address.
    let mut addr = leptos_options.site_addr;
    if let Ok(raw) = std::env::var("PORT") {
        match raw.parse() {
            Ok(port) => addr.set_port(port),
            Err(err) => {
                tracing::warn!("Invalid PORT value {raw:?} ({err}), keeping {}", addr.port())
            }
        }
    }

    let app_context = match AppContext::from_env().await {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Failed to initialize idea store: {e}");
            std::process::exit(1);
        }
    };

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<ListIdeasFn>();
    server_fn::axum::register_explicit::<SubmitIdeaFn>();
    server_fn::axum::register_explicit::<UpvoteIdeaFn>();
    tracing::info!("Registered server functions: ListIdeasFn, SubmitIdeaFn, UpvoteIdeaFn");

    let app = Router::new()
        .merge(routes::api_router(app_context.clone()))
        .route(
            "/api/{*fn_name}",
            post({
                let ctx = app_context.clone();
                move |req| {
                    let ctx = ctx.clone();
                    async move {
                        handle_server_fns_with_context(move || provide_context(ctx.clone()), req)
                            .await
                    }
                }
            }),
        )
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>💡</text></svg>"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

use crate::{api::leave_request, config::Config};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{HttpResponse, error::InternalError, web};

/// Builds a per-IP limiter allowing `requests_per_min` with an equal burst.
pub fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);
    let cfg = GovernorConfigBuilder::default()
        .milliseconds_per_request(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .unwrap_or_default();
    Governor::new(&cfg)
}

/// Malformed JSON bodies get the same `{ "message": .. }` 400 as validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(serde_json::json!({
            "message": err.to_string()
        }));
        InternalError::from_response(err, response).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.service(
        web::scope(&config.api_prefix)
            .app_data(json_config())
            .wrap(build_limiter(config.rate_per_min))
            .service(
                web::scope("/v1")
                    // /v1/leave/duration
                    .service(
                        web::resource("/leave/duration")
                            .route(web::post().to(leave_request::calculate_duration)),
                    )
                    // /v1/holidays
                    .service(
                        web::resource("/holidays").route(web::get().to(leave_request::holiday_list)),
                    ),
            ),
    );
}

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge, Encoder, HistogramVec,
    IntCounterVec, IntGauge, TextEncoder,
};

lazy_static! {
    // HTTP Metrics
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .unwrap();

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .unwrap();

    // Quiz Metrics
    pub static ref QUIZ_SESSIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "quiz_sessions_total",
        "Total number of quiz session lifecycle transitions",
        &["status"]
    )
    .unwrap();

    pub static ref QUIZ_SESSIONS_ACTIVE: IntGauge = register_int_gauge!(
        "quiz_sessions_active",
        "Number of quiz sessions currently held in memory"
    )
    .unwrap();

    pub static ref QUIZ_ANSWERS_SUBMITTED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "quiz_answers_submitted_total",
        "Total number of quiz answers submitted",
        &["result"]
    )
    .unwrap();

    pub static ref CAREER_RECOMMENDATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "career_recommendations_total",
        "Total number of career recommendations produced",
        &["category"]
    )
    .unwrap();

    pub static ref SESSION_SWEEPER_TICKS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "session_sweeper_ticks_total",
        "Total number of session sweeper ticks",
        &["status"]
    )
    .unwrap();
}

/// Renders all metrics in Prometheus text format
pub fn render_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| prometheus::Error::Msg(format!("Failed to convert metrics to UTF-8: {}", e)))
}

pub fn record_session_transition(status: &str) {
    QUIZ_SESSIONS_TOTAL.with_label_values(&[status]).inc();
}

pub fn record_answer(accepted: bool) {
    let label = if accepted { "accepted" } else { "rejected" };
    QUIZ_ANSWERS_SUBMITTED_TOTAL.with_label_values(&[label]).inc();
}

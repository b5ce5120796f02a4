//! End-to-end controller tests against a loopback HTTP stub.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::{Duration, Instant};

use sentidash::config::AppConfig;
use sentidash::egui_app::controller::EguiController;
use sentidash::egui_app::state::FeatureState;

/// Serve one canned HTTP response per incoming connection, in order.
fn serve_responses(responses: Vec<String>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("local addr");
    thread::spawn(move || {
        for response in responses {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut request = [0u8; 8192];
            let _ = stream.read(&mut request);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}")
}

fn json_response(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    )
}

fn controller_for(base: String) -> EguiController {
    EguiController::new(AppConfig {
        api_base: base,
        ..AppConfig::default()
    })
}

fn poll_until(controller: &mut EguiController, mut done: impl FnMut(&EguiController) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        controller.poll_background_jobs();
        if done(controller) {
            return;
        }
        assert!(Instant::now() < deadline, "background work never settled");
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn startup_probe_reports_health_and_catalog() {
    let base = serve_responses(vec![
        json_response(r#"{"status":"ok"}"#),
        json_response(
            r#"{"distilbert":{"default":"distilbert-base-uncased-finetuned-sst-2-english"},"visobert":{"sentiment_default":"5CD-AI/vietnamese-sentiment-visobert","fill_mask_default":"5CD-AI/visobert-14gb-corpus"},"multilingual":{"default":"nlptown/bert-base-multilingual-uncased-sentiment"}}"#,
        ),
    ]);
    let mut controller = controller_for(base);
    controller.start_startup_probe();
    poll_until(&mut controller, |c| {
        !c.ui.backend.health.is_loading() && !c.ui.backend.catalog.is_loading()
    });
    assert_eq!(controller.ui.backend.health, FeatureState::Success(()));
    match &controller.ui.backend.catalog {
        FeatureState::Success(catalog) => {
            assert_eq!(
                catalog.fill_mask_default.as_deref(),
                Some("5CD-AI/visobert-14gb-corpus")
            );
        }
        other => panic!("unexpected catalog state: {other:?}"),
    }
}

#[test]
fn fill_mask_flow_populates_ranked_rows() {
    let base = serve_responses(vec![json_response(
        r#"{"model_type":"visobert","model_name":"5CD-AI/visobert-14gb-corpus","top_k":3,"candidates":[{"token_str":"quần","score":0.3141,"sequence":"shop làm ăn như cái quần"},{"token_str":"gì","score":0.2203},{"token_str":"máy","score":0.0512}]}"#,
    )]);
    let mut controller = controller_for(base);
    controller.ui.fill_mask.text = "shop làm ăn như cái <mask>".into();
    controller.ui.fill_mask.top_k = 3;
    controller.submit_fill_mask();
    poll_until(&mut controller, |c| !c.any_job_running());
    match &controller.ui.fill_mask.result {
        FeatureState::Success(view) => {
            let ranks: Vec<usize> = view.rows.iter().map(|row| row.rank).collect();
            assert_eq!(ranks, [1, 2, 3]);
            assert_eq!(view.rows[0].token, "quần");
            assert_eq!(view.rows[0].score_text, "31.41%");
            assert_eq!(
                view.rows[0].sequence.as_deref(),
                Some("shop làm ăn như cái quần")
            );
        }
        other => panic!("unexpected fill-mask state: {other:?}"),
    }
}

#[test]
fn offline_backend_surfaces_a_transport_error() {
    // Unroutable port; the connect fails fast with a transport error.
    let mut controller = controller_for("http://127.0.0.1:1".into());
    controller.ui.sentiment.text = "Sản phẩm rất tốt".into();
    controller.submit_sentiment();
    poll_until(&mut controller, |c| !c.any_job_running());
    let error = controller
        .ui
        .sentiment
        .result
        .error()
        .expect("expected an error result");
    assert!(error.starts_with("HTTP error:"), "got: {error}");
}

//! Manual smoke-test harness
//!
//! Not part of the engine's public contract — just a place to run a
//! handful of orders through it and watch the execution reports go by.
//! Latency measurement belongs in a dedicated benchmark harness, not here.

use matching_core::{Engine, EngineConfig, ExecutionReport, OrderRequest, Side};

fn fixed(tag: &str) -> matching_core::FixedString {
    let mut buf = [0u8; matching_core::config::STRINGLEN];
    let bytes = tag.as_bytes();
    buf[..bytes.len()].copy_from_slice(bytes);
    buf
}

fn print_report(report: ExecutionReport) {
    println!(
        "fill side={:?} price={} size={}",
        report.side, report.price, report.size
    );
}

fn main() {
    matching_core::logging::init_logging();

    let mut engine = Engine::init(EngineConfig::default()).expect("valid config");

    let symbol = fixed("DEMO");
    let bid_id = engine.limit(
        OrderRequest {
            symbol,
            trader: fixed("alice"),
            side: Side::Bid,
            price: 100,
            size: 10,
        },
        &mut print_report,
    );
    println!("resting bid id={bid_id}");

    let ask_id = engine.limit(
        OrderRequest {
            symbol,
            trader: fixed("bob"),
            side: Side::Ask,
            price: 100,
            size: 4,
        },
        &mut print_report,
    );
    println!("crossing ask id={ask_id}");

    engine.cancel(bid_id);
    println!(
        "after cancel: best_bid={:?} best_ask={:?}",
        engine.best_bid(),
        engine.best_ask()
    );

    engine.destroy();
}

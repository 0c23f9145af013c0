//! Load testing for the match API.

use std::time::Instant;

mod common;

#[tokio::test]
async fn test_load_performance() {
    let server = common::start_server().await;

    let concurrency = 20; // Reduced for consistency in debug mode
    let requests_per_task = 50;
    let total_requests = concurrency * requests_per_task;
    let paths = [
        "/api/match-schedule",
        "/api/upcoming-matches/search?team=CSK",
        "/api/points-table",
        "/api/live-match",
    ];

    let client = reqwest::Client::new();
    let start = Instant::now();

    let mut tasks = Vec::new();
    for task_id in 0..concurrency {
        let client = client.clone();
        let url = server.url(paths[task_id % paths.len()]);
        tasks.push(tokio::spawn(async move {
            let mut latencies = Vec::new();
            for _ in 0..requests_per_task {
                let req_start = Instant::now();
                if let Ok(res) = client.get(&url).send().await {
                    if res.status().is_success() && res.bytes().await.is_ok() {
                        latencies.push(req_start.elapsed());
                    }
                }
            }
            latencies
        }));
    }

    let mut all_latencies = Vec::new();
    for task in tasks {
        let latencies = task.await.unwrap();
        all_latencies.extend(latencies);
    }

    let duration = start.elapsed();
    let rps = total_requests as f64 / duration.as_secs_f64();

    if all_latencies.is_empty() {
        panic!("No successful requests recorded");
    }

    all_latencies.sort();
    let p50 = all_latencies[all_latencies.len() / 2];
    let p95 = all_latencies[(all_latencies.len() as f64 * 0.95) as usize];
    let p99 = all_latencies[(all_latencies.len() as f64 * 0.99) as usize];

    println!("\n--- Load Test Results ---");
    println!("Total Requests: {}", total_requests);
    println!("Concurrency:    {}", concurrency);
    println!("Total Duration: {:?}", duration);
    println!("Requests/sec:   {:.2}", rps);
    println!("P50 Latency:    {:?}", p50);
    println!("P95 Latency:    {:?}", p95);
    println!("P99 Latency:    {:?}", p99);
    println!("Success Rate:   {}/{}", all_latencies.len(), total_requests);
    println!("-------------------------\n");

    assert_eq!(all_latencies.len(), total_requests);
}

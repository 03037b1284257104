mod common;

use std::sync::Arc;

use tokio::task::JoinSet;

use cardstmt_core::StatementParser;

#[tokio::test]
async fn test_concurrent_parses_match_sequential() {
    let parser = Arc::new(StatementParser::new());

    let mut expected = Vec::new();
    for (bank, text) in common::ALL {
        let record = parser.parse_pages(&common::pages(text), bank).unwrap();
        expected.push(serde_json::to_string(&record).unwrap());
    }

    let mut tasks = JoinSet::new();
    for round in 0..4 {
        for (index, (bank, text)) in common::ALL.into_iter().enumerate() {
            let parser = Arc::clone(&parser);
            tasks.spawn_blocking(move || {
                let record = parser.parse_pages(&common::pages(text), bank).unwrap();
                (round, index, serde_json::to_string(&record).unwrap())
            });
        }
    }

    let mut seen = 0;
    while let Some(joined) = tasks.join_next().await {
        let (_, index, json) = joined.unwrap();
        assert_eq!(json, expected[index]);
        seen += 1;
    }
    assert_eq!(seen, 16);
}

#[tokio::test]
async fn test_concurrent_uploads_are_independent() {
    let parser = Arc::new(StatementParser::new());
    let document = Arc::new(common::pdf_with_lines(&[
        "Statement Date : 12-10-2024",
        "Total Amount Due : Rs. 8,750.50",
    ]));

    let mut tasks = JoinSet::new();
    for _ in 0..8 {
        let parser = Arc::clone(&parser);
        let document = Arc::clone(&document);
        tasks.spawn_blocking(move || parser.parse_upload(&document[..], "bob"));
    }

    while let Some(joined) = tasks.join_next().await {
        let record = joined.unwrap().unwrap();
        assert_eq!(record.total_due.to_string(), "8750.50");
    }
}

use emudns_application::ports::DnsCachePort;
use emudns_application::use_cases::{CacheAnswersUseCase, ExportCacheUseCase};
use emudns_domain::{CacheRecord, Config, DnsAnswer, DomainError, RecordClass, RecordData, RecordType};
use emudns_infrastructure::dns::CacheSession;
use std::net::{IpAddr, Ipv4Addr};

fn session() -> CacheSession {
    let mut config = Config::default();
    config.timer.tick_ms = 100;
    CacheSession::from_config(&config)
}

fn add(session: &mut CacheSession, name: &str, ttl: u32) {
    session.add_entry(name, RecordType::A, RecordClass::IN, ttl, "203.0.113.9");
}

fn advance(session: &mut CacheSession, ticks: usize) {
    for _ in 0..ticks {
        session.tick();
    }
}

fn export(session: &mut CacheSession) -> Vec<CacheRecord> {
    ExportCacheUseCase::new(4).execute(session).unwrap()
}

#[test]
fn test_records_expire_through_tick_loop() {
    let mut s = session();
    add(&mut s, "short.test", 1);
    add(&mut s, "long.test", 5);

    advance(&mut s, 10);
    let names: Vec<String> = export(&mut s).into_iter().map(|r| r.name).collect();

    assert_eq!(names, vec!["long.test".to_string()]);
    assert_eq!(s.metrics().snapshot().expirations, 1);
}

#[test]
fn test_readd_with_longer_ttl_outlives_first_ttl() {
    let mut s = session();
    add(&mut s, "a.test", 1);
    add(&mut s, "a.test", 30);

    advance(&mut s, 20);
    let records = export(&mut s);

    assert_eq!(s.len(), 1);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].ttl, 30);
    assert_eq!(records[0].time_left, 28);
    assert_eq!(s.metrics().snapshot().refreshes, 1);
}

#[test]
fn test_export_reports_remaining_ttl() {
    let mut s = session();
    add(&mut s, "a.test", 30);
    advance(&mut s, 50);

    let records = export(&mut s);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].ttl, 30);
    assert_eq!(records[0].time_left, 25);
}

#[test]
fn test_flush_then_reclaim_through_ticks() {
    let mut config = Config::default();
    config.cache.flush_threshold = 100;
    let mut s = CacheSession::from_config(&config);
    for i in 0..350 {
        add(&mut s, &format!("host{i}.test"), 600);
    }

    s.flush();
    assert_eq!(s.len(), 350);
    assert!(export(&mut s).is_empty());

    advance(&mut s, 4);
    assert!(s.is_empty());
    assert_eq!(s.metrics().snapshot().reclaimed, 350);
}

#[test]
fn test_entries_added_after_flush_survive_reclamation() {
    let mut s = session();
    for i in 0..20 {
        add(&mut s, &format!("old{i}.test"), 600);
    }
    s.flush();
    add(&mut s, "old3.test", 600);
    add(&mut s, "new.test", 600);

    advance(&mut s, 3);

    let names: Vec<String> = export(&mut s).into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["old3.test".to_string(), "new.test".to_string()]);
    assert_eq!(s.len(), 2);
}

#[test]
fn test_remove_record_by_identity() {
    let mut s = session();
    add(&mut s, "a.test", 60);

    assert!(!s.remove_record("a.test", RecordType::AAAA, RecordClass::IN, "203.0.113.9"));
    assert!(s.remove_record("a.test", RecordType::A, RecordClass::IN, "203.0.113.9"));
    assert!(!s.remove_record("a.test", RecordType::A, RecordClass::IN, "203.0.113.9"));
    assert!(s.is_empty());
    assert_eq!(s.wheel().pending_count(), 0);
}

#[test]
fn test_record_added_before_flush_cannot_be_removed_by_identity() {
    let mut s = session();
    add(&mut s, "a.test", 60);
    s.flush();

    assert!(!s.remove_record("a.test", RecordType::A, RecordClass::IN, "203.0.113.9"));
    assert_eq!(s.len(), 1);
}

#[test]
fn test_get_next_before_reset_is_an_error() {
    let mut s = session();
    add(&mut s, "a.test", 60);

    assert_eq!(s.get_next(1), Err(DomainError::IteratorNotReady));
}

#[test]
fn test_export_interleaved_with_expiry() {
    let mut s = session();
    for i in 0..10 {
        add(&mut s, &format!("host{i}.test"), if i % 2 == 0 { 1 } else { 60 });
    }

    assert!(!s.iter_reset());
    let mut seen = s.get_next(3).unwrap();
    advance(&mut s, 10);
    while !s.iter_is_stopped() {
        seen.extend(s.get_next(3).unwrap());
    }

    let names: Vec<String> = seen.into_iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec!["host0.test", "host1.test", "host2.test", "host3.test", "host5.test", "host7.test", "host9.test"]
    );
}

#[test]
fn test_cache_answers_use_case_feeds_session() {
    let mut s = session();
    let answers = vec![
        DnsAnswer::new(
            "a.test",
            RecordType::A,
            RecordClass::IN,
            60,
            RecordData::Address(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))),
        ),
        DnsAnswer::new(
            "txt.test",
            RecordType::TXT,
            RecordClass::IN,
            60,
            RecordData::Text(vec!["v=spf1".to_string()]),
        ),
        DnsAnswer::new(
            "www.a.test",
            RecordType::CNAME,
            RecordClass::IN,
            60,
            RecordData::Name("a.test".to_string()),
        ),
    ];

    let cached = CacheAnswersUseCase::new().execute(&mut s, &answers);

    assert_eq!(cached, 2);
    let records = export(&mut s);
    assert_eq!(records[0].answer, "192.0.2.1");
    assert_eq!(records[1].record_type, RecordType::CNAME);
    assert_eq!(records[1].answer, "a.test");
}

#[test]
fn test_random_workload_keeps_epochs_isolated() {
    let mut rng = fastrand::Rng::with_seed(0xd15c);
    let mut s = session();
    let mut live: Vec<String> = Vec::new();

    for step in 0..2_000 {
        match rng.u8(..10) {
            0 => {
                s.flush();
                live.clear();
            }
            1 => {
                if !live.is_empty() {
                    let name = live.remove(rng.usize(..live.len()));
                    assert!(s.remove_record(&name, RecordType::A, RecordClass::IN, "203.0.113.9"));
                }
            }
            2 | 3 => {
                s.tick();
            }
            _ => {
                let name = format!("host{step}.test");
                add(&mut s, &name, 3600);
                live.push(name);
            }
        }
    }

    let exported: Vec<String> = export(&mut s).into_iter().map(|r| r.name).collect();
    assert_eq!(exported, live);
}

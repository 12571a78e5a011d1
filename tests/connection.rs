//! Commands issued through a recording `redis::ConnectionLike`

use redis::{ConnectionLike, RedisResult, Value};
use redis_timeseries::{
    Aggregation, GetOptions, MultiGetOptions, MultiRangeOptions, RangeOptions, Reducer, TsCommand,
    TsCommands,
};

#[derive(Default)]
struct RecordingConnection {
    sent: Vec<Vec<u8>>,
}

impl ConnectionLike for RecordingConnection {
    fn req_packed_command(&mut self, cmd: &[u8]) -> RedisResult<Value> {
        self.sent.push(cmd.to_vec());
        Ok(Value::Nil)
    }

    fn req_packed_commands(
        &mut self,
        cmd: &[u8],
        _offset: usize,
        count: usize,
    ) -> RedisResult<Vec<Value>> {
        self.sent.push(cmd.to_vec());
        Ok(vec![Value::Nil; count])
    }

    fn get_db(&self) -> i64 {
        0
    }

    fn check_connection(&mut self) -> bool {
        true
    }

    fn is_open(&self) -> bool {
        true
    }
}

/// RESP array of bulk strings, as the server reads it
fn packed(parts: &[&str]) -> Vec<u8> {
    let mut buf = format!("*{}\r\n", parts.len()).into_bytes();
    for part in parts {
        buf.extend_from_slice(format!("${}\r\n{}\r\n", part.len(), part).as_bytes());
    }
    buf
}

#[test]
fn test_ts_get() {
    let mut con = RecordingConnection::default();
    let reply = con.ts_get("temp:1", &GetOptions::new().latest(true)).unwrap();
    assert_eq!(reply, Value::Nil);
    assert_eq!(con.sent, vec![packed(&["TS.GET", "temp:1", "LATEST"])]);
}

#[test]
fn test_ts_mget() {
    let mut con = RecordingConnection::default();
    con.ts_mget(&MultiGetOptions::new().with_labels(true), &["region=eu"])
        .unwrap();
    assert_eq!(
        con.sent,
        vec![packed(&["TS.MGET", "WITHLABELS", "FILTER", "region=eu"])]
    );
}

#[test]
fn test_ts_range_and_revrange() {
    let mut con = RecordingConnection::default();
    let options = RangeOptions::new().aggregation(Aggregation::Avg, 1000);
    con.ts_range("temp:1", 0, 5000, &options).unwrap();
    con.ts_revrange("temp:1", 0, 5000, &options).unwrap();
    assert_eq!(
        con.sent,
        vec![
            packed(&["TS.RANGE", "temp:1", "0", "5000", "AGGREGATION", "avg", "1000"]),
            packed(&["TS.REVRANGE", "temp:1", "0", "5000", "AGGREGATION", "avg", "1000"]),
        ]
    );
}

#[test]
fn test_ts_mrange_and_mrevrange() {
    let mut con = RecordingConnection::default();
    let options = MultiRangeOptions::new()
        .count(1)
        .group_by("region", Reducer::Min);
    con.ts_mrange(0, 10, &options, &["kind=temp"]).unwrap();
    con.ts_mrevrange(0, 10, &options, &["kind=temp"]).unwrap();
    let tail = ["0", "10", "COUNT", "1", "FILTER", "kind=temp", "GROUPBY", "region", "REDUCE", "min"];

    let mut forward = vec!["TS.MRANGE"];
    forward.extend(tail);
    let mut reverse = vec!["TS.MREVRANGE"];
    reverse.extend(tail);
    assert_eq!(con.sent, vec![packed(&forward), packed(&reverse)]);
}

#[test]
fn test_command_query_matches_packed_cmd() {
    let mut con = RecordingConnection::default();
    let command = TsCommand::range("k", 1, 2, &RangeOptions::new().filter_by_value(0.5, 1.5));
    command.query(&mut con).unwrap();
    assert_eq!(con.sent, vec![command.to_cmd().get_packed_command()]);
    assert_eq!(
        con.sent[0],
        packed(&["TS.RANGE", "k", "1", "2", "FILTER_BY_VALUE", "0.500000", "1.500000"])
    );
}

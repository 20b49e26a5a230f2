//! Replays recorded interactions from a cassette.

use std::collections::HashMap;

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Replays interactions from a loaded cassette, serving them in recorded
/// order per port/method pair.
pub struct CassetteReplayer {
    /// Per port+method queue of interactions (in order).
    queues: HashMap<PortMethodKey, Vec<Interaction>>,
    /// Per port+method flags marking interactions already served.
    consumed: HashMap<PortMethodKey, Vec<bool>>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, Vec<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            queues.entry(key).or_default().push(interaction.clone());
        }
        let consumed = queues.iter().map(|(k, q)| (k.clone(), vec![false; q.len()])).collect();
        Self { queues, consumed }
    }

    /// Return the earliest unconsumed interaction for the given port and
    /// method that satisfies `matches`, and mark it consumed.
    ///
    /// # Errors
    ///
    /// Returns a descriptive error if the cassette has no (more) matching
    /// interactions for the given port/method combination.
    pub fn next_matching(
        &mut self,
        port: &str,
        method: &str,
        matches: impl Fn(&Interaction) -> bool,
    ) -> Result<&Interaction, String> {
        let key = PortMethodKey { port: port.to_string(), method: method.to_string() };

        let Some(queue) = self.queues.get(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            available.sort();
            return Err(format!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            ));
        };

        let consumed = self.consumed.entry(key).or_insert_with(|| vec![false; queue.len()]);
        let Some(index) = (0..queue.len()).find(|&i| !consumed[i] && matches(&queue[i])) else {
            let used = consumed.iter().filter(|c| **c).count();
            return Err(format!(
                "Cassette exhausted: no unconsumed interaction for port={port:?} method={method:?} \
                 matches ({used} of {count} consumed). Last interaction was seq={last_seq}.",
                count = queue.len(),
                last_seq = queue.last().map_or(0, |i| i.seq),
            ));
        };

        consumed[index] = true;
        Ok(&queue[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions,
        }
    }

    fn shell_run(seq: u64, command: &str, stdout: &str) -> Interaction {
        Interaction {
            seq,
            port: "shell".into(),
            method: "run".into(),
            input: json!({"command": command}),
            output: json!({"ok": {"exit_code": 0, "stdout": stdout, "stderr": ""}}),
        }
    }

    fn any(_: &Interaction) -> bool {
        true
    }

    #[test]
    fn replays_interactions_in_recorded_order() {
        let cassette = make_cassette(vec![shell_run(0, "a", "first"), shell_run(1, "b", "second")]);
        let mut replayer = CassetteReplayer::new(&cassette);

        let i1 = replayer.next_matching("shell", "run", any).unwrap();
        assert_eq!(i1.seq, 0);
        assert_eq!(i1.output["ok"]["stdout"], "first");

        let i2 = replayer.next_matching("shell", "run", any).unwrap();
        assert_eq!(i2.seq, 1);
        assert_eq!(i2.output["ok"]["stdout"], "second");
    }

    #[test]
    fn matching_skips_other_interactions_without_consuming_them() {
        let cassette = make_cassette(vec![
            shell_run(0, "echo first", "first"),
            shell_run(1, "echo second", "second"),
        ]);
        let mut replayer = CassetteReplayer::new(&cassette);

        let second =
            replayer.next_matching("shell", "run", |i| i.input["command"] == "echo second").unwrap();
        assert_eq!(second.seq, 1);

        let first = replayer.next_matching("shell", "run", any).unwrap();
        assert_eq!(first.seq, 0);
    }

    #[test]
    fn exhausted_replayer_reports_last_seq() {
        let cassette = make_cassette(vec![shell_run(4, "only", "only")]);
        let mut replayer = CassetteReplayer::new(&cassette);
        replayer.next_matching("shell", "run", any).unwrap();

        let err = replayer.next_matching("shell", "run", any).unwrap_err();
        assert!(err.contains("Cassette exhausted"));
        assert!(err.contains("1 of 1 consumed"));
        assert!(err.contains("seq=4"));
    }

    #[test]
    fn unknown_port_lists_available_pairs() {
        let cassette = make_cassette(vec![shell_run(0, "x", "x")]);
        let mut replayer = CassetteReplayer::new(&cassette);

        let err = replayer.next_matching("unknown", "method", any).unwrap_err();
        assert!(err.contains("no interactions recorded"));
        assert!(err.contains("shell::run"));
    }
}

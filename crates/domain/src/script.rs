//! Post-response capture scripts.
//!
//! Each item can carry one "test" event whose script runs in Postman
//! after the response arrives, extracting values into collection
//! variables for use by later requests.

use serde::{Deserialize, Serialize};

/// A response-capture rule.
///
/// The expression is a free-form JavaScript expression evaluated over
/// `data`, the parsed response body. When it is truthy, the result is
/// stored under the named collection variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRule {
    /// Expression over the parsed response body.
    pub expression: String,
    /// Collection variable the result is stored under.
    pub variable: String,
}

impl CaptureRule {
    /// Creates a new capture rule.
    #[must_use]
    pub fn new(expression: impl Into<String>, variable: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            variable: variable.into(),
        }
    }
}

/// An executable script attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Script MIME type; always `text/javascript`.
    #[serde(rename = "type")]
    pub script_type: String,
    /// Script source, one line per entry.
    pub exec: Vec<String>,
}

/// An event binding a script to an item lifecycle hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The hook to run on; always `test` (post-response).
    pub listen: String,
    /// The script to execute.
    pub script: Script,
}

impl Event {
    /// Builds the single post-response event applying the capture rules
    /// in insertion order.
    ///
    /// The script parses the response body once up front; a parse failure
    /// is swallowed, leaving `data` null so that no capture fires. Each
    /// rule evaluates against the original parsed response, never against
    /// an earlier rule's stored variable.
    #[must_use]
    pub fn captures(rules: &[CaptureRule]) -> Self {
        let mut exec = vec![
            "let data = null;".to_string(),
            "try { data = pm.response.json(); } catch (err) {}".to_string(),
        ];
        for rule in rules {
            let CaptureRule {
                expression,
                variable,
            } = rule;
            exec.push(format!("const v_{variable} = {expression};"));
            exec.push(format!(
                "if (v_{variable}) {{ pm.collectionVariables.set('{variable}', v_{variable}); }}"
            ));
        }

        Self {
            listen: "test".to_string(),
            script: Script {
                script_type: "text/javascript".to_string(),
                exec,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_captures_prelude_parses_response_once() {
        let event = Event::captures(&[CaptureRule::new("data && data.token", "userToken")]);
        assert_eq!(event.listen, "test");
        assert_eq!(event.script.script_type, "text/javascript");
        assert_eq!(event.script.exec[0], "let data = null;");
        assert_eq!(
            event.script.exec[1],
            "try { data = pm.response.json(); } catch (err) {}"
        );
    }

    #[test]
    fn test_single_rule_renders_guarded_assignment() {
        let event = Event::captures(&[CaptureRule::new("data && data.userId", "userId")]);
        assert_eq!(event.script.exec.len(), 4);
        assert_eq!(event.script.exec[2], "const v_userId = data && data.userId;");
        assert_eq!(
            event.script.exec[3],
            "if (v_userId) { pm.collectionVariables.set('userId', v_userId); }"
        );
    }

    #[test]
    fn test_rules_render_in_insertion_order() {
        let event = Event::captures(&[
            CaptureRule::new("data && data.token", "userToken"),
            CaptureRule::new("data && data._id", "userId"),
        ]);
        let exec = &event.script.exec;
        assert_eq!(exec.len(), 6);
        assert!(exec[2].contains("v_userToken"));
        assert!(exec[4].contains("v_userId"));
    }
}

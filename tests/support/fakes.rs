//! Scripted stand-ins for processes, the health endpoint and the operator.
//!
//! Runner and probe share an [`Events`] log so tests can assert ordering
//! across them.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use devstack::core::health::HealthProbe;
use devstack::core::prompt::Confirm;
use devstack::core::runner::{CommandRunner, ExecOutput, ExecRequest};
use devstack::error::Result;

use super::fixtures::{KEY_HELPER_OUTPUT, PS_BACKEND_RUNNING};

/// Ordered log of everything the fakes saw.
pub type Events = Rc<RefCell<Vec<String>>>;

pub fn events() -> Events {
    Events::default()
}

/// Canned outputs for commands containing `pattern`; the last one repeats.
struct Rule {
    pattern: String,
    outputs: RefCell<VecDeque<ExecOutput>>,
}

impl Rule {
    fn next(&self) -> ExecOutput {
        let mut outputs = self.outputs.borrow_mut();
        if outputs.len() > 1 {
            outputs.pop_front().unwrap_or_default()
        } else {
            outputs.front().cloned().unwrap_or_default()
        }
    }
}

/// A runner answering from substring rules.
///
/// Every tool is installed and every command succeeds with empty output
/// unless a rule says otherwise. Rules added later win.
pub struct ScriptedRunner {
    missing: Vec<String>,
    rules: Vec<Rule>,
    requests: RefCell<Vec<ExecRequest>>,
    events: Events,
}

impl ScriptedRunner {
    /// Backend running, key helper printing [`KEY_HELPER_OUTPUT`].
    pub fn new(events: &Events) -> Self {
        Self {
            missing: Vec::new(),
            rules: Vec::new(),
            requests: RefCell::new(Vec::new()),
            events: Rc::clone(events),
        }
        .on("compose ps", ExecOutput::ok(PS_BACKEND_RUNNING))
        .on("generate_admin_key", ExecOutput::ok(KEY_HELPER_OUTPUT))
    }

    /// Pretend `program` is not on `PATH`.
    pub fn without(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    /// Answer commands whose line contains `pattern` with `output`.
    pub fn on(self, pattern: &str, output: ExecOutput) -> Self {
        self.on_each(pattern, vec![output])
    }

    /// Answer successive matching commands with `outputs` in turn.
    pub fn on_each(mut self, pattern: &str, outputs: Vec<ExecOutput>) -> Self {
        self.rules.push(Rule {
            pattern: pattern.to_string(),
            outputs: RefCell::new(outputs.into()),
        });
        self
    }

    pub fn requests(&self) -> Vec<ExecRequest> {
        self.requests.borrow().clone()
    }

    /// Command lines in the order they ran.
    pub fn commands(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(ExecRequest::command_line)
            .collect()
    }

    /// First request whose line contains `fragment`.
    pub fn find(&self, fragment: &str) -> Option<ExecRequest> {
        self.requests
            .borrow()
            .iter()
            .find(|r| r.command_line().contains(fragment))
            .cloned()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, request: &ExecRequest) -> Result<ExecOutput> {
        let line = request.command_line();
        self.events.borrow_mut().push(format!("run: {}", line));
        self.requests.borrow_mut().push(request.clone());

        let output = self
            .rules
            .iter()
            .rev()
            .find(|rule| line.contains(rule.pattern.as_str()))
            .map(Rule::next)
            .unwrap_or_else(|| ExecOutput::ok(""));
        Ok(output)
    }

    fn has_program(&self, program: &str) -> bool {
        !self.missing.iter().any(|m| m == program)
    }
}

/// A health endpoint that fails a fixed number of times first.
pub struct FakeProbe {
    failures_left: Cell<Option<u32>>,
    checks: Cell<u32>,
    events: Events,
}

impl FakeProbe {
    pub fn healthy_after(failures: u32, events: &Events) -> Self {
        Self {
            failures_left: Cell::new(Some(failures)),
            checks: Cell::new(0),
            events: Rc::clone(events),
        }
    }

    pub fn healthy(events: &Events) -> Self {
        Self::healthy_after(0, events)
    }

    pub fn never_healthy(events: &Events) -> Self {
        Self {
            failures_left: Cell::new(None),
            checks: Cell::new(0),
            events: Rc::clone(events),
        }
    }

    pub fn checks(&self) -> u32 {
        self.checks.get()
    }
}

impl HealthProbe for FakeProbe {
    fn check(&self, url: &str) -> bool {
        self.checks.set(self.checks.get() + 1);
        self.events.borrow_mut().push(format!("probe: {}", url));

        match self.failures_left.get() {
            None => false,
            Some(0) => true,
            Some(n) => {
                self.failures_left.set(Some(n - 1));
                false
            }
        }
    }
}

/// An operator who always gives the same answer.
pub struct FixedConfirm {
    answer: bool,
    asked: RefCell<Vec<String>>,
}

impl FixedConfirm {
    pub fn yes() -> Self {
        Self {
            answer: true,
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn no() -> Self {
        Self {
            answer: false,
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Questions asked so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Confirm for FixedConfirm {
    fn confirm(&self, question: &str) -> Result<bool> {
        self.asked.borrow_mut().push(question.to_string());
        Ok(self.answer)
    }
}

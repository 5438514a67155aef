/// Which control number, if any, is logged in for this run.
///
/// There is no logout; the session only ends with the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    active_control_number: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.active_control_number
            .as_deref()
            .is_some_and(|cn| !cn.is_empty())
    }

    pub fn active_control_number(&self) -> Option<&str> {
        self.active_control_number
            .as_deref()
            .filter(|cn| !cn.is_empty())
    }

    pub(crate) fn activate(&mut self, control_number: &str) {
        self.active_control_number = Some(control_number.to_string());
    }
}

//! Import requests for frequently used third-party modules.

pub mod rx {
    use tsweld_core::ImportRequest;

    pub const PATH: &str = "rxjs";

    pub fn observable() -> ImportRequest {
        ImportRequest::new("Observable", PATH)
    }

    pub fn replay_subject() -> ImportRequest {
        ImportRequest::new("ReplaySubject", PATH)
    }
}

pub mod stomp {
    use tsweld_core::ImportRequest;

    pub const PATH: &str = "@stomp/rx-stomp";

    pub fn rx_stomp() -> ImportRequest {
        ImportRequest::new("RxStomp", PATH)
    }
}

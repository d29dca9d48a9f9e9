#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use alloy::primitives::B256;

use counter_dapp_core::{
    AccountId, ConnectionState, CounterId, FragmentPort, NavigationController, PortError,
};

#[derive(Debug, Default)]
pub struct TestFragment {
    value: RefCell<String>,
    writes: Cell<usize>,
    fail_reads: bool,
    fail_writes: bool,
}

impl TestFragment {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(value.to_owned()),
            ..Self::default()
        }
    }

    pub fn unreadable() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn read_only(value: &str) -> Self {
        Self {
            value: RefCell::new(value.to_owned()),
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn current(&self) -> String {
        self.value.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl FragmentPort for TestFragment {
    fn read(&self) -> Result<String, PortError> {
        if self.fail_reads {
            return Err(PortError::Transport("missing window".to_owned()));
        }
        Ok(self.value.borrow().clone())
    }

    fn write(&self, value: &str) -> Result<(), PortError> {
        if self.fail_writes {
            return Err(PortError::Transport("history blocked".to_owned()));
        }
        self.writes.set(self.writes.get() + 1);
        *self.value.borrow_mut() = value.to_owned();
        Ok(())
    }
}

pub const VALID_ID: &str = "0x5f2c1a9e0b7d4c3f8e6a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60";
pub const OTHER_ID: &str = "0xaaaaaaaabbbbbbbbccccccccddddddddeeeeeeeeffffffff0000000011111111";

pub fn counter_id(raw: &str) -> CounterId {
    CounterId::parse(raw).expect("valid counter id")
}

pub fn connected() -> ConnectionState {
    ConnectionState::Connected {
        account: AccountId(B256::repeat_byte(0x11)),
    }
}

pub fn connected_controller(fragment: &str) -> NavigationController<TestFragment> {
    let mut nav = NavigationController::new(TestFragment::with_value(fragment));
    nav.set_connection(connected());
    nav
}

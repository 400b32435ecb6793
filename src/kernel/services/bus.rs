use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Duration;

#[derive(Debug)]
pub enum CanvasMessage {
    Action(crate::kernel::Action),
}

#[derive(Clone)]
pub struct CanvasBusSender {
    tx: Sender<CanvasMessage>,
}

pub struct CanvasBusReceiver {
    rx: Receiver<CanvasMessage>,
}

pub fn canvas_bus() -> (CanvasBusSender, CanvasBusReceiver) {
    let (tx, rx) = mpsc::channel();
    (CanvasBusSender { tx }, CanvasBusReceiver { rx })
}

impl CanvasBusSender {
    pub fn send(&self, msg: CanvasMessage) -> Result<(), mpsc::SendError<CanvasMessage>> {
        self.tx.send(msg)
    }

    pub fn send_action(
        &self,
        action: crate::kernel::Action,
    ) -> Result<(), mpsc::SendError<CanvasMessage>> {
        self.send(CanvasMessage::Action(action))
    }
}

impl CanvasBusReceiver {
    pub fn try_recv(&mut self) -> Result<CanvasMessage, TryRecvError> {
        self.rx.try_recv()
    }

    pub fn recv_timeout(
        &mut self,
        timeout: Duration,
    ) -> Result<CanvasMessage, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// Single-threaded pump: the only place that polls and reads the input
/// driver. Every handler call runs to completion before the next event is
/// read, which is what lets windows keep their interaction state without any
/// locking.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Calls `handler` with `None` once per tick (draw time) and with
    /// `Some(event)` for every queued event. Bursts such as mouse drags are
    /// drained before the next tick so rendering never trails the input.
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if handler(None)? == ControlFlow::Quit {
                return Ok(());
            }
            if !self.driver.poll(self.poll_interval)? {
                continue;
            }
            loop {
                let event = self.driver.read()?;
                if handler(Some(event))? == ControlFlow::Quit {
                    return Ok(());
                }
                if !self.driver.poll(Duration::ZERO)? {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use std::collections::VecDeque;

    struct Scripted(VecDeque<Event>);

    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(!self.0.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            self.0
                .pop_front()
                .ok_or_else(|| io::Error::other("script exhausted"))
        }
    }

    fn drag(column: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn burst_is_drained_before_next_tick() {
        let script = VecDeque::from([drag(1), drag(2), drag(3)]);
        let mut event_loop = EventLoop::new(Scripted(script), Duration::ZERO);
        let mut seen = Vec::new();
        event_loop
            .run(|event| {
                seen.push(event.is_some());
                // Quit on the second tick.
                if seen.iter().filter(|e| !**e).count() == 2 {
                    Ok(ControlFlow::Quit)
                } else {
                    Ok(ControlFlow::Continue)
                }
            })
            .unwrap();
        assert_eq!(seen, vec![false, true, true, true, false]);
    }

    #[test]
    fn handler_error_stops_the_loop() {
        let mut event_loop = EventLoop::new(Scripted(VecDeque::new()), Duration::ZERO);
        let err = event_loop
            .run(|_| Err(io::Error::other("boom")))
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}

/*
Timers that decide when shapes get spawned automatically.

There are two loops, both polled once per frame with the current time in
milliseconds:

    AutoSpawn  - one shape every spawn interval, forever
    BurstLoop  - one shape every spawn interval until it has made N shapes

The scheduler owns exactly one of each (the burst is optional).  Restarting a
loop replaces its handle, so the old one is dropped and can never fire again.
*/

/// Periodic spawn, one shape per elapsed interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoSpawn {
    last_spawn_ms: f64,
}

impl AutoSpawn {
    pub fn new(now_ms: f64) -> Self {
        AutoSpawn { last_spawn_ms: now_ms }
    }

    pub fn poll(&mut self, now_ms: f64, interval_ms: u32) -> bool {
        if now_ms - self.last_spawn_ms >= interval_ms as f64 {
            self.last_spawn_ms = now_ms;
            true
        } else {
            false
        }
    }
}

/// Bounded spawn loop started by the spawn-rate controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstLoop {
    target: u32,
    spawned: u32,
    mark_ms: f64,
}

impl BurstLoop {
    pub fn new(target: u32, now_ms: f64) -> Self {
        BurstLoop { target, spawned: 0, mark_ms: now_ms }
    }

    pub fn poll(&mut self, now_ms: f64, interval_ms: u32) -> bool {
        if self.is_finished() {
            return false;
        }
        if now_ms - self.mark_ms >= interval_ms as f64 {
            self.spawned += 1;
            self.mark_ms = now_ms;
            return true;
        }
        false
    }

    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    pub fn remaining(&self) -> u32 {
        self.target.saturating_sub(self.spawned)
    }
}

/// Owns the spawn loop handles
#[derive(Debug)]
pub struct SpawnScheduler {
    auto: AutoSpawn,
    burst: Option<BurstLoop>,
}

impl SpawnScheduler {
    pub fn new(now_ms: f64) -> Self {
        SpawnScheduler { auto: AutoSpawn::new(now_ms), burst: None }
    }

    /// Drops the running periodic loop and starts a fresh one
    pub fn restart_auto(&mut self, now_ms: f64) {
        self.auto = AutoSpawn::new(now_ms);
    }

    /// Drops any running burst and starts a new one for `count` shapes
    pub fn restart_burst(&mut self, count: u32, now_ms: f64) {
        self.burst = Some(BurstLoop::new(count, now_ms));
    }

    pub fn burst(&self) -> Option<&BurstLoop> {
        self.burst.as_ref()
    }

    /// Number of shapes to spawn this frame
    pub fn tick(&mut self, now_ms: f64, interval_ms: u32) -> u32 {
        let mut due = 0;
        if self.auto.poll(now_ms, interval_ms) {
            due += 1;
        }
        if let Some(burst) = self.burst.as_mut() {
            if burst.poll(now_ms, interval_ms) {
                due += 1;
            }
            if burst.is_finished() {
                self.burst = None;
            }
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_spawn_fires_once_per_interval() {
        let mut auto = AutoSpawn::new(0.0);
        assert!(!auto.poll(999.0, 1000));
        assert!(auto.poll(1000.0, 1000));
        assert!(!auto.poll(1500.0, 1000));
        assert!(auto.poll(2016.0, 1000));
    }

    #[test]
    fn burst_stops_after_its_count() {
        let mut burst = BurstLoop::new(3, 0.0);
        let mut fired = 0;
        let mut now = 0.0;
        for _ in 0..600 {
            now += 16.0;
            if burst.poll(now, 1000) {
                fired += 1;
            }
        }
        assert_eq!(fired, 3);
        assert!(burst.is_finished());
        assert_eq!(burst.remaining(), 0);
    }

    #[test]
    fn scheduler_drops_finished_burst() {
        let mut scheduler = SpawnScheduler::new(0.0);
        scheduler.restart_burst(1, 0.0);
        assert_eq!(scheduler.tick(1000.0, 1000), 2);
        assert!(scheduler.burst().is_none());
        assert_eq!(scheduler.tick(1500.0, 1000), 0);
    }

    #[test]
    fn restarting_burst_replaces_the_old_one() {
        let mut scheduler = SpawnScheduler::new(0.0);
        scheduler.restart_burst(5, 0.0);
        assert_eq!(scheduler.tick(1000.0, 1000), 2);
        scheduler.restart_burst(2, 1100.0);
        assert_eq!(scheduler.burst().map(BurstLoop::remaining), Some(2));

        // Only the new burst and the periodic loop run
        assert_eq!(scheduler.tick(2000.0, 1000), 1);
        assert_eq!(scheduler.tick(2100.0, 1000), 1);
        assert_eq!(scheduler.tick(3100.0, 1000), 2);
        assert!(scheduler.burst().is_none());
    }

    #[test]
    fn restarting_auto_resets_its_clock() {
        let mut scheduler = SpawnScheduler::new(0.0);
        scheduler.restart_auto(900.0);
        assert_eq!(scheduler.tick(1000.0, 1000), 0);
        assert_eq!(scheduler.tick(1900.0, 1000), 1);
    }

    #[test]
    fn zero_count_burst_never_fires() {
        let mut burst = BurstLoop::new(0, 0.0);
        assert!(burst.is_finished());
        assert!(!burst.poll(5000.0, 1000));
    }
}

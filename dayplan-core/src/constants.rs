/// Port dayplan-server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 4096;

/// Notification lead time (minutes) for a fresh event form.
pub const DEFAULT_NOTIFICATION_MINUTES: i64 = 10;

/// Reminder lead times offered by the front ends, with their labels.
pub const NOTIFICATION_OPTIONS: [(i64, &str); 5] = [
    (1, "1분 전"),
    (10, "10분 전"),
    (60, "1시간 전"),
    (120, "2시간 전"),
    (1440, "1일 전"),
];

/// Event categories offered by the front ends.
pub const CATEGORIES: [&str; 4] = ["업무", "개인", "가족", "기타"];

/// Look up the label for a reminder lead time.
pub fn notification_label(minutes: i64) -> Option<&'static str> {
    NOTIFICATION_OPTIONS
        .iter()
        .find(|(m, _)| *m == minutes)
        .map(|(_, label)| *label)
}

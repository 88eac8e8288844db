//! Site-wide constants. Contact details and tuning knobs live here so the
//! components stay free of magic numbers.

/// 자격증공장 중앙 컨트롤 본부 (J-control hub) landline.
pub const PHONE_NUMBER: &str = "051-757-5134";

/// Naver Map directions to the Busan center.
pub const MAP_URL: &str = "https://map.naver.com/p/directions/-/14372155.3537346,4187711.2060766,%EC%9E%90%EA%B2%A9%EC%A6%9D%EA%B3%B5%EC%9E%A5%20%EA%B4%80%EB%A6%AC%ED%98%95%EB%8F%85%EC%84%9C%EC%8B%A4,1199907214,PLACE_POI/-/transit?c=15.00,0,0,0,dh";

/// Naver Place visitor reviews.
pub const REVIEWS_URL: &str = "https://m.place.naver.com/place/1050862828/review/visitor";

/// localStorage key for the persisted scroll-mode preference.
pub const SCROLL_MODE_STORAGE_KEY: &str = "studyfactory.scroll-mode";

/// Query parameter that overrides the scroll mode at load time
/// (`?scroll=native|standard|snap`).
pub const SCROLL_MODE_QUERY_PARAM: &str = "scroll";

/// Minimum interval between two accepted incremental page steps.
pub const PAGE_COOLDOWN_MS: f64 = 800.0;

/// Wheel deltas at or below this magnitude are trackpad jitter, not intent.
pub const WHEEL_DELTA_THRESHOLD: f64 = 20.0;

/// A touch gesture must travel more than this many pixels vertically to
/// count as a swipe. The stricter of the thresholds the design iterations
/// tried; small drags settle back instead of paging.
pub const TOUCH_SWIPE_THRESHOLD_PX: f64 = 100.0;

/// Grace period before an inactive section resets its internal carousel,
/// long enough for the section to finish animating out of view.
pub const SECTION_RESET_GRACE_MS: u32 = 800;

/// Duration of the paged-mode stack transition, injected into the track
/// as a CSS variable.
pub const PAGE_TRANSITION_MS: u32 = 700;

/// Fallback viewport height when no `window` is available.
pub const FALLBACK_VIEWPORT_HEIGHT: f64 = 1200.0;

/// URL fragments, one per page, in page order. The single source of truth
/// for how many pages exist and what each is called in the address bar.
pub const PAGE_FRAGMENTS: [&str; 6] = [
    "hero",
    "benefits",
    "happiness",
    "reviews",
    "franchise",
    "footer",
];

mod date;
pub use self::date::{CalendarDate, Timestamp, DATE_FORMAT, TIME_FORMAT};

mod codes;
pub use self::codes::{
    FilterVariable, Frequency, OrderBy, SearchType, SeasonalAdjustment, SortOrder, TagGroup,
    UnitType, UpdatesFilter,
};

mod observation;
pub use self::observation::{Observation, MISSING_VALUE};

mod meta;
pub use self::meta::{
    CategoryList, Collection, ErrorEnvelope, ObservationPage, SeriesList, SeriesPage, TagPage,
};

mod category;
pub use self::category::{Category, CategoryID};

mod series;
pub use self::series::{Series, SeriesID};

mod tag;
pub use self::tag::Tag;

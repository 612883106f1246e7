// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Booking, BookingStatus, Category, CategoryFilter, CulturalEvent, Destination, DifficultyLevel,
    EventCategory, GeoPoint, Guide, Itinerary, NewBooking, NewItinerary, NewReview,
    NewUserProfile, QueryParameters, RankedDestination, Review, TravelPreferences, UserProfile,
};
pub use requests::{
    AssistantRequest, CreateBookingRequest, CreateItineraryRequest, CreateProfileRequest,
    CreateReviewRequest, EventsQuery, GuidesQuery, QueryDestinationsRequest,
    SearchDestinationsQuery, UpdateBookingStatusRequest, UpdatePreferencesRequest,
    UserBookingsQuery, UserItinerariesQuery,
};
pub use responses::{
    AssistantResponse, DestinationView, ErrorResponse, HealthResponse, QueryDestinationsResponse,
};

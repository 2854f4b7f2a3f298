use crate::shared::types::PredictionRequest;

pub const MEAL_PLANS: &[&str] = &["Meal Plan 1", "Meal Plan 2", "Meal Plan 3", "Not Selected"];
pub const ROOM_TYPES: &[&str] = &[
    "Room_Type 1",
    "Room_Type 2",
    "Room_Type 3",
    "Room_Type 4",
    "Room_Type 5",
    "Room_Type 6",
    "Room_Type 7",
];
pub const MARKET_SEGMENTS: &[&str] = &["Aviation", "Complementary", "Corporate", "Offline", "Online"];
pub const YES_NO: &[&str] = &["0", "1"];

/// How a field is edited in the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldInput {
    Integer,
    Decimal,
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    NoOfAdults,
    NoOfChildren,
    NoOfWeekendNights,
    NoOfWeekNights,
    TypeOfMealPlan,
    RequiredCarParkingSpace,
    RoomTypeReserved,
    LeadTime,
    ArrivalYear,
    ArrivalMonth,
    ArrivalDate,
    MarketSegmentType,
    RepeatedGuest,
    NoOfPreviousCancellations,
    NoOfPreviousBookingsNotCanceled,
    AvgPricePerRoom,
    NoOfSpecialRequests,
}

impl BookingField {
    #[cfg(test)]
    pub const ALL: [BookingField; 17] = [
        BookingField::NoOfAdults,
        BookingField::NoOfChildren,
        BookingField::NoOfWeekendNights,
        BookingField::NoOfWeekNights,
        BookingField::TypeOfMealPlan,
        BookingField::RequiredCarParkingSpace,
        BookingField::RoomTypeReserved,
        BookingField::LeadTime,
        BookingField::ArrivalYear,
        BookingField::ArrivalMonth,
        BookingField::ArrivalDate,
        BookingField::MarketSegmentType,
        BookingField::RepeatedGuest,
        BookingField::NoOfPreviousCancellations,
        BookingField::NoOfPreviousBookingsNotCanceled,
        BookingField::AvgPricePerRoom,
        BookingField::NoOfSpecialRequests,
    ];

    /// Wire name, also used as the form label.
    pub fn name(self) -> &'static str {
        match self {
            BookingField::NoOfAdults => "no_of_adults",
            BookingField::NoOfChildren => "no_of_children",
            BookingField::NoOfWeekendNights => "no_of_weekend_nights",
            BookingField::NoOfWeekNights => "no_of_week_nights",
            BookingField::TypeOfMealPlan => "type_of_meal_plan",
            BookingField::RequiredCarParkingSpace => "required_car_parking_space",
            BookingField::RoomTypeReserved => "room_type_reserved",
            BookingField::LeadTime => "lead_time",
            BookingField::ArrivalYear => "arrival_year",
            BookingField::ArrivalMonth => "arrival_month",
            BookingField::ArrivalDate => "arrival_date",
            BookingField::MarketSegmentType => "market_segment_type",
            BookingField::RepeatedGuest => "repeated_guest",
            BookingField::NoOfPreviousCancellations => "no_of_previous_cancellations",
            BookingField::NoOfPreviousBookingsNotCanceled => "no_of_previous_bookings_not_canceled",
            BookingField::AvgPricePerRoom => "avg_price_per_room",
            BookingField::NoOfSpecialRequests => "no_of_special_requests",
        }
    }

    pub fn hint(self) -> Option<&'static str> {
        match self {
            BookingField::LeadTime => Some("Days between booking date and arrival date"),
            BookingField::RoomTypeReserved => Some("Selected room category at booking time"),
            BookingField::AvgPricePerRoom => Some("Average price per night for the room"),
            BookingField::NoOfSpecialRequests => {
                Some("Number of special requests such as high floor")
            }
            _ => None,
        }
    }

    pub fn input(self) -> FieldInput {
        match self {
            BookingField::TypeOfMealPlan => FieldInput::Choice(MEAL_PLANS),
            BookingField::RoomTypeReserved => FieldInput::Choice(ROOM_TYPES),
            BookingField::MarketSegmentType => FieldInput::Choice(MARKET_SEGMENTS),
            BookingField::RequiredCarParkingSpace | BookingField::RepeatedGuest => {
                FieldInput::Choice(YES_NO)
            }
            BookingField::AvgPricePerRoom => FieldInput::Decimal,
            _ => FieldInput::Integer,
        }
    }

    fn int_slot(self, req: &mut PredictionRequest) -> Option<&mut i32> {
        Some(match self {
            BookingField::NoOfAdults => &mut req.no_of_adults,
            BookingField::NoOfChildren => &mut req.no_of_children,
            BookingField::NoOfWeekendNights => &mut req.no_of_weekend_nights,
            BookingField::NoOfWeekNights => &mut req.no_of_week_nights,
            BookingField::RequiredCarParkingSpace => &mut req.required_car_parking_space,
            BookingField::LeadTime => &mut req.lead_time,
            BookingField::ArrivalYear => &mut req.arrival_year,
            BookingField::ArrivalMonth => &mut req.arrival_month,
            BookingField::ArrivalDate => &mut req.arrival_date,
            BookingField::RepeatedGuest => &mut req.repeated_guest,
            BookingField::NoOfPreviousCancellations => &mut req.no_of_previous_cancellations,
            BookingField::NoOfPreviousBookingsNotCanceled => {
                &mut req.no_of_previous_bookings_not_canceled
            }
            BookingField::NoOfSpecialRequests => &mut req.no_of_special_requests,
            _ => return None,
        })
    }

    fn text_slot(self, req: &mut PredictionRequest) -> Option<&mut String> {
        match self {
            BookingField::TypeOfMealPlan => Some(&mut req.type_of_meal_plan),
            BookingField::RoomTypeReserved => Some(&mut req.room_type_reserved),
            BookingField::MarketSegmentType => Some(&mut req.market_segment_type),
            _ => None,
        }
    }

    /// Current value rendered for an input element.
    pub fn value(self, req: &PredictionRequest) -> String {
        match self {
            BookingField::NoOfAdults => req.no_of_adults.to_string(),
            BookingField::NoOfChildren => req.no_of_children.to_string(),
            BookingField::NoOfWeekendNights => req.no_of_weekend_nights.to_string(),
            BookingField::NoOfWeekNights => req.no_of_week_nights.to_string(),
            BookingField::TypeOfMealPlan => req.type_of_meal_plan.clone(),
            BookingField::RequiredCarParkingSpace => req.required_car_parking_space.to_string(),
            BookingField::RoomTypeReserved => req.room_type_reserved.clone(),
            BookingField::LeadTime => req.lead_time.to_string(),
            BookingField::ArrivalYear => req.arrival_year.to_string(),
            BookingField::ArrivalMonth => req.arrival_month.to_string(),
            BookingField::ArrivalDate => req.arrival_date.to_string(),
            BookingField::MarketSegmentType => req.market_segment_type.clone(),
            BookingField::RepeatedGuest => req.repeated_guest.to_string(),
            BookingField::NoOfPreviousCancellations => {
                req.no_of_previous_cancellations.to_string()
            }
            BookingField::NoOfPreviousBookingsNotCanceled => {
                req.no_of_previous_bookings_not_canceled.to_string()
            }
            BookingField::AvgPricePerRoom => req.avg_price_per_room.to_string(),
            BookingField::NoOfSpecialRequests => req.no_of_special_requests.to_string(),
        }
    }

    /// Writes raw input into the record. Returns false (and leaves the record
    /// as it was) when the input does not parse or is not an allowed choice.
    pub fn apply(self, req: &mut PredictionRequest, raw: &str) -> bool {
        let raw = raw.trim();
        if let FieldInput::Choice(options) = self.input() {
            if !options.contains(&raw) {
                return false;
            }
        }
        if let Some(slot) = self.int_slot(req) {
            return match raw.parse::<i32>() {
                Ok(v) => {
                    *slot = v;
                    true
                }
                Err(_) => false,
            };
        }
        if let Some(slot) = self.text_slot(req) {
            *slot = raw.to_string();
            return true;
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => {
                req.avg_price_per_room = v;
                true
            }
            _ => false,
        }
    }
}

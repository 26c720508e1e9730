pub mod booking_closure;

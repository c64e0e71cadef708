pub mod api_route;

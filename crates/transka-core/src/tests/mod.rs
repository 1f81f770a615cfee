mod dispatcher;
mod driver;
mod request;

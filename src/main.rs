fn main() {
    greentech_web::run();
}

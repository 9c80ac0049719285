//! Demo content source
//!
//! Serves a fixed snapshot of placeholder users and posts so the CLI works
//! offline. The records match the first entries of the public API.

use crate::domain::result::Result;
use crate::domain::{Address, Company, Geo, Post, User, UserData};
use crate::ports::ContentSource;

#[allow(clippy::too_many_arguments)]
fn demo_user(
    id: u64,
    name: &str,
    username: &str,
    email: &str,
    (street, suite, city, zipcode): (&str, &str, &str, &str),
    (lat, lng): (&str, &str),
    phone: &str,
    website: &str,
    (company, catch_phrase, bs): (&str, &str, &str),
) -> User {
    User::new(
        id,
        UserData {
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            website: website.to_string(),
            address: Address {
                street: street.to_string(),
                suite: suite.to_string(),
                city: city.to_string(),
                zipcode: zipcode.to_string(),
                geo: Geo {
                    lat: lat.to_string(),
                    lng: lng.to_string(),
                },
            },
            company: Company {
                name: company.to_string(),
                catch_phrase: catch_phrase.to_string(),
                bs: bs.to_string(),
            },
        },
    )
}

/// Generate demo users
pub fn generate_demo_users() -> Vec<User> {
    vec![
        demo_user(
            1,
            "Leanne Graham",
            "Bret",
            "Sincere@april.biz",
            ("Kulas Light", "Apt. 556", "Gwenborough", "92998-3874"),
            ("-37.3159", "81.1496"),
            "1-770-736-8031 x56442",
            "hildegard.org",
            (
                "Romaguera-Crona",
                "Multi-layered client-server neural-net",
                "harness real-time e-markets",
            ),
        ),
        demo_user(
            2,
            "Ervin Howell",
            "Antonette",
            "Shanna@melissa.tv",
            ("Victor Plains", "Suite 879", "Wisokyburgh", "90566-7771"),
            ("-43.9509", "-34.4618"),
            "010-692-6593 x09125",
            "anastasia.net",
            (
                "Deckow-Crist",
                "Proactive didactic contingency",
                "synergize scalable supply-chains",
            ),
        ),
        demo_user(
            3,
            "Clementine Bauch",
            "Samantha",
            "Nathan@yesenia.net",
            ("Douglas Extension", "Suite 847", "McKenziehaven", "59590-4157"),
            ("-68.6102", "-47.0653"),
            "1-463-123-4447",
            "ramiro.info",
            (
                "Romaguera-Jacobson",
                "Face to face bifurcated interface",
                "e-enable strategic applications",
            ),
        ),
        demo_user(
            4,
            "Patricia Lebsack",
            "Karianne",
            "Julianne.OConner@kory.org",
            ("Hoeger Mall", "Apt. 692", "South Elvis", "53919-4257"),
            ("29.4572", "-164.2990"),
            "493-170-9623 x156",
            "kale.biz",
            (
                "Robel-Corkery",
                "Multi-tiered zero tolerance productivity",
                "transition cutting-edge web services",
            ),
        ),
    ]
}

/// Generate demo posts
pub fn generate_demo_posts() -> Vec<Post> {
    let post = |user_id: u64, id: u64, title: &str, body: &str| Post {
        user_id,
        id,
        title: title.to_string(),
        body: body.to_string(),
    };

    vec![
        post(
            1,
            1,
            "sunt aut facere repellat provident occaecati excepturi optio reprehenderit",
            "quia et suscipit suscipit recusandae consequuntur expedita et cum reprehenderit molestiae ut ut quas totam nostrum rerum est autem sunt rem eveniet architecto",
        ),
        post(
            1,
            2,
            "qui est esse",
            "est rerum tempore vitae sequi sint nihil reprehenderit dolor beatae ea dolores neque fugiat blanditiis voluptate porro vel nihil molestiae ut reiciendis qui aperiam non debitis possimus qui neque nisi nulla",
        ),
        post(
            1,
            3,
            "ea molestias quasi exercitationem repellat qui ipsa sit aut",
            "et iusto sed quo iure voluptatem occaecati omnis eligendi aut ad voluptatem doloribus vel accusantium quis pariatur molestiae porro eius odio et labore et velit aut",
        ),
        post(
            2,
            11,
            "et ea vero quia laudantium autem",
            "delectus reiciendis molestiae occaecati non minima eveniet qui voluptatibus accusamus in eum beatae sit vel qui neque voluptates ut commodi qui incidunt ut animi commodi",
        ),
        post(
            3,
            21,
            "asperiores ea ipsam voluptatibus modi minima quia sint",
            "repellat aliquid praesentium dolorem quo sed totam minus non itaque nihil labore molestiae sunt dolor eveniet hic recusandae veniam tempora et tenetur expedita sunt",
        ),
    ]
}

/// Content source serving the bundled demo data
#[derive(Debug, Default)]
pub struct DemoSource;

impl DemoSource {
    pub fn new() -> Self {
        Self
    }
}

impl ContentSource for DemoSource {
    fn name(&self) -> &str {
        "demo"
    }

    fn fetch_users(&self) -> Result<Vec<User>> {
        Ok(generate_demo_users())
    }

    fn fetch_posts(&self) -> Result<Vec<Post>> {
        Ok(generate_demo_posts())
    }
}

//! Container tooling output.

use super::{Predicate, Response, Rule};

pub(super) const RULES: &[Rule] = &[
    Rule {
        when: Predicate::Contains("version"),
        then: Response::Text(VERSION),
    },
    Rule {
        when: Predicate::AllOf(&[
            Predicate::AnyOf(&["images", "image ls"]),
            Predicate::Contains("nginx"),
        ]),
        then: Response::Text(IMAGES_NGINX),
    },
    Rule {
        when: Predicate::AnyOf(&["images", "image ls"]),
        then: Response::Text(IMAGES_EMPTY),
    },
    Rule {
        when: Predicate::Contains("pull"),
        then: Response::Render(pull),
    },
    Rule {
        when: Predicate::Contains("run"),
        then: Response::Text("16d013710642d83d1772683093457422507a3673576997827099491070609397"),
    },
    Rule {
        when: Predicate::Contains("ps"),
        then: Response::Text(PS),
    },
    Rule {
        when: Predicate::Contains("stop"),
        then: Response::Text("proxy"),
    },
    Rule {
        when: Predicate::Contains("rm"),
        then: Response::Text("proxy"),
    },
];

const VERSION: &str = "Client: Docker Engine - Community
 Version:           20.10.17
 API version:       1.41
 Go version:        go1.17.11
 OS/Arch:           linux/amd64

Server: Docker Engine - Community
 Engine:
  Version:          20.10.17
  API version:      1.41 (minimum version 1.12)
  Go version:       go1.17.11";

const IMAGES_EMPTY: &str = "REPOSITORY   TAG       IMAGE ID       CREATED       SIZE";

const IMAGES_NGINX: &str = "REPOSITORY   TAG       IMAGE ID       CREATED       SIZE
nginx        latest    605c77e624dd   2 months ago  141MB";

const PS: &str = "CONTAINER ID   IMAGE          COMMAND                  CREATED          STATUS          PORTS                NAMES
16d013710642   nginx:latest   \"/docker-entrypoint.…\"   4 seconds ago    Up 3 seconds    0.0.0.0:80->80/tcp   proxy";

/// `docker pull <image>`: the image is the third space-separated word.
fn pull(cmd: &str) -> String {
    let image = cmd
        .split(' ')
        .nth(2)
        .filter(|s| !s.is_empty())
        .unwrap_or("nginx");
    format!(
        "Using default tag: latest
latest: Pulling from library/{image}
a2abf6c4d29d: Pulling fs layer
e4b0476203f9: Download complete
Digest: sha256:7b9c...
Status: Downloaded newer image for {image}:latest"
    )
}

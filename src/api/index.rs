use axum::response::Html;

/// `GET /` converter page.
///
/// A new conversion aborts the request still in flight, so an older answer
/// can never overwrite the status of a newer one.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Spotify to Deezer</title>
  <style>
    body { font-family: sans-serif; max-width: 36rem; margin: 4rem auto; padding: 0 1rem; }
    input { width: 100%; padding: .5rem; box-sizing: border-box; }
    button { margin-top: .5rem; padding: .5rem 1rem; }
    #result { margin-top: 1rem; min-height: 1.5rem; }
    .output-container { display: none; gap: .5rem; margin-top: 1rem; }
    .output-container input { flex: 1; }
  </style>
</head>
<body>
  <h1>Spotify to Deezer</h1>
  <input id="spotifyLink" type="text" placeholder="https://open.spotify.com/track/...">
  <button id="convert">Convert</button>
  <div id="result"></div>
  <div class="output-container">
    <input id="outputLink" type="text" readonly>
    <button id="copy">Copy</button>
  </div>
  <script>
    let inFlight = null;

    async function convertLink() {
      const resultDiv = document.getElementById("result");
      const outputContainer = document.querySelector(".output-container");
      const outputLink = document.getElementById("outputLink");
      const link = document.getElementById("spotifyLink").value;

      if (inFlight) {
        inFlight.abort();
      }
      const controller = new AbortController();
      inFlight = controller;

      outputContainer.style.display = "none";
      outputLink.value = "";
      resultDiv.textContent = "Converting...";

      try {
        const response = await fetch("/convert?link=" + encodeURIComponent(link), {
          signal: controller.signal,
        });
        const body = await response.json();
        resultDiv.innerHTML = body.html;
        if (body.status === "success") {
          outputLink.value = body.link;
          outputContainer.style.display = "flex";
        }
      } catch (error) {
        if (error.name !== "AbortError") {
          resultDiv.textContent = "The converter is not reachable.";
        }
      } finally {
        if (inFlight === controller) {
          inFlight = null;
        }
      }
    }

    async function copyLink() {
      const outputLink = document.getElementById("outputLink");
      await navigator.clipboard.writeText(outputLink.value);
      alert("Link copied to clipboard!");
    }

    document.getElementById("convert").addEventListener("click", convertLink);
    document.getElementById("copy").addEventListener("click", copyLink);
  </script>
</body>
</html>
"#;
